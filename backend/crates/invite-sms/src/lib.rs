//! Outbound text messages for invite codes.
//!
//! `SmsSender` is the seam the server depends on. `TwilioSender` talks to the
//! Twilio Messages API and `LogSender` stands in when delivery is disabled.

mod error;
mod log_sender;
mod message;
mod sms_sender;
mod twilio_sender;


pub use error::{Result, SmsError};
pub use log_sender::LogSender;
pub use message::invite_message;
pub use sms_sender::SmsSender;
pub use twilio_sender::{TwilioOptions, TwilioSender};

mod access;
mod code;
mod identity;
mod phone_number;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Submit a phone number and receive two invite codes by text
    RequestCodes {
        /// Phone number, e.g. 650-555-0100
        #[arg(long)]
        phone: String,
    },

    /// Redeem an invite code
    Claim {
        /// Invite code
        code: String,
    },

    /// Check whether the signed-in identity has access
    Access,

    /// Check whether a code can still be redeemed
    Code {
        /// Invite code
        id: String,
    },

    /// Show the signed-in user's phone record
    Me,

    /// List courses
    Courses,

    /// List tests for a course, newest first
    Feed {
        /// Course id (defaults to the first course)
        #[arg(long, short = 'c')]
        course: Option<String>,

        /// School (defaults to the server's default school)
        #[arg(long, short = 's')]
        school: Option<String>,
    },

    /// Evaluate the access gate for a landing URL
    Gate {
        /// Page URL, e.g. https://thavma.club/?code=abc123
        url: String,
    },
}

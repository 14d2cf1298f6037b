/// Body of the text sent after a phone number is verified: the brand line
/// followed by one code per line.
pub fn invite_message<S: AsRef<str>>(brand: &str, codes: &[S]) -> String {
    let mut body = format!("{} invite codes", brand);
    for code in codes {
        body.push('\n');
        body.push_str(code.as_ref());
    }
    body
}

use invite_core::Access;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// The gated feed
    Feed,
    /// Phone submission and code entry
    Join,
}

/// Where a page should send the visitor for the current access flag.
/// `None` means stay.
pub fn redirect_for(page: Page, access: Access) -> Option<Page> {
    match (page, access) {
        (Page::Feed, Access::Denied) => Some(Page::Join),
        (Page::Join, Access::Granted) => Some(Page::Feed),
        _ => None,
    }
}

pub mod course_list_response;
#[allow(clippy::module_inception)]
pub mod feed;
pub mod feed_query;
pub mod feed_response;

mod comment_frame;
mod picture_frame;
mod private_frame;
mod text_frame;
mod url_frame;

pub use comment_frame::CommentFrame;
pub use picture_frame::PictureFrame;
pub use private_frame::PrivateFrame;
pub use text_frame::TextFrame;
pub use url_frame::UrlFrame;

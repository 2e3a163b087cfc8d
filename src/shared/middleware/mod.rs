mod https_redirect;

pub use https_redirect::{redirect_to_https, HttpsRedirect};

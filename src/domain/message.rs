//! User-facing transient messages.

/// Message shown by the view, identified by a stable non-zero resource id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Message {
    NetworkUnavailable = 1001,
    ServerUnavailable = 1002,
    SessionExpired = 1003,
    NotFound = 1004,
    ValidationFailed = 1005,
    SomethingWentWrong = 1006,

    WishlistUpdateFailed = 2001,
    CartUpdateFailed = 2002,
    CategoryUpdateFailed = 2003,

    AddedToCart = 3001,
    AddedToWishlist = 3002,

    InvalidCredentials = 4001,
    WrongCredentials = 4002,
}

impl Message {
    pub fn resource_id(self) -> u32 {
        self as u32
    }

    pub fn text(self) -> &'static str {
        match self {
            Message::NetworkUnavailable => "No internet connection",
            Message::ServerUnavailable => "Server is not available, try again later",
            Message::SessionExpired => "Your session has expired, please log in again",
            Message::NotFound => "The requested item could not be found",
            Message::ValidationFailed => "The request was rejected by the server",
            Message::SomethingWentWrong => "Something went wrong",
            Message::WishlistUpdateFailed => "Could not update your wishlist",
            Message::CartUpdateFailed => "Could not update your cart",
            Message::CategoryUpdateFailed => "Could not update the category filter",
            Message::AddedToCart => "Added to cart",
            Message::AddedToWishlist => "Added to wishlist",
            Message::InvalidCredentials => "Enter a username and a password",
            Message::WrongCredentials => "Username or password is incorrect",
        }
    }
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

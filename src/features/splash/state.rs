use crate::domain::SplashDestination;
use crate::mvi::ViewData;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SplashModel {
    /// Set once the user status has been read
    pub destination: Option<SplashDestination>,
}

impl ViewData for SplashModel {}

use crate::mvi::{UiState, ViewData};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntroPage {
    pub title: &'static str,
    pub description: &'static str,
}

pub const INTRO_PAGES: [IntroPage; 3] = [
    IntroPage {
        title: "Discover",
        description: "Browse products from every category in one place",
    },
    IntroPage {
        title: "Save for later",
        description: "Keep the things you like on your wishlist",
    },
    IntroPage {
        title: "Check out",
        description: "Collect items in your cart and order when ready",
    },
];

#[derive(Debug, Clone, PartialEq, Default)]
pub struct IntroModel {
    /// Index into [`INTRO_PAGES`]
    pub page: usize,
}

impl ViewData for IntroModel {}

impl IntroModel {
    pub fn initial_state() -> UiState<Self> {
        UiState::result(Self::default())
    }

    pub fn current(&self) -> IntroPage {
        INTRO_PAGES[self.page.min(INTRO_PAGES.len() - 1)]
    }

    pub fn is_last_page(&self) -> bool {
        self.page + 1 >= INTRO_PAGES.len()
    }
}

//! Startup navigation decision.

/// What the splash screen knows about the user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserStatus {
    pub session_token: Option<String>,
    pub is_app_intro_finished: bool,
}

/// Where the splash screen sends the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashDestination {
    /// Onboarding was never completed.
    AppIntroNotFinished,
    /// Onboarding done, no session.
    LoggedOut,
    /// Onboarding done, session present.
    LoggedIn,
}

impl UserStatus {
    /// First match wins: an unfinished intro beats any token, and an empty
    /// token counts as no token.
    pub fn destination(&self) -> SplashDestination {
        if !self.is_app_intro_finished {
            return SplashDestination::AppIntroNotFinished;
        }
        match self.session_token.as_deref() {
            None | Some("") => SplashDestination::LoggedOut,
            Some(_) => SplashDestination::LoggedIn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(finished: bool, token: Option<&str>) -> UserStatus {
        UserStatus {
            session_token: token.map(str::to_string),
            is_app_intro_finished: finished,
        }
    }

    #[test]
    fn unfinished_intro_without_token_goes_to_intro() {
        assert_eq!(
            status(false, None).destination(),
            SplashDestination::AppIntroNotFinished
        );
    }

    #[test]
    fn unfinished_intro_wins_over_token() {
        assert_eq!(
            status(false, Some("x")).destination(),
            SplashDestination::AppIntroNotFinished
        );
    }

    #[test]
    fn finished_intro_without_token_goes_to_login() {
        assert_eq!(
            status(true, None).destination(),
            SplashDestination::LoggedOut
        );
    }

    #[test]
    fn empty_token_is_logged_out() {
        assert_eq!(
            status(true, Some("")).destination(),
            SplashDestination::LoggedOut
        );
    }

    #[test]
    fn finished_intro_with_token_goes_to_dashboard() {
        assert_eq!(
            status(true, Some("abc")).destination(),
            SplashDestination::LoggedIn
        );
    }
}

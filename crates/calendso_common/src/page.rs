//! Framework-independent contract for server-rendered pages.
//!
//! A page's data phase receives the request parameters and answers with either
//! the props its render phase needs or a terminal "not found". Handlers turn
//! that into an HTTP response; the data phase itself never touches axum.

/// Outcome of a page's server-side data phase.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerSideProps<P> {
    Props(P),
    NotFound,
}

impl<P> ServerSideProps<P> {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServerSideProps::NotFound)
    }

    pub fn props(self) -> Option<P> {
        match self {
            ServerSideProps::Props(props) => Some(props),
            ServerSideProps::NotFound => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn props_are_only_available_when_found() {
        assert_eq!(ServerSideProps::Props(3).props(), Some(3));
        let missing: ServerSideProps<u8> = ServerSideProps::NotFound;
        assert!(missing.is_not_found());
        assert_eq!(missing.props(), None);
    }
}

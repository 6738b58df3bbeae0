use crate::{DataSource, FilterEngine, Presenter};

/// Input coming from the search box
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The query text changed
    Query(String),
    /// The search box was engaged or released
    Active(bool),
}

/// A line typed at the interactive prompt
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Event(Event),
    Quit,
}

impl Input {
    /// `/search` engages the search box, `/cancel` releases it, `/clear`
    /// empties the query and `/quit` leaves. Anything else is the new query.
    pub fn parse(line: &str) -> Self {
        match line.trim_end_matches(&['\r', '\n'][..]) {
            "/quit" => Input::Quit,
            "/search" => Input::Event(Event::Active(true)),
            "/cancel" => Input::Event(Event::Active(false)),
            "/clear" => Input::Event(Event::Query(String::new())),
            text => Input::Event(Event::Query(text.to_string())),
        }
    }
}

/// Outcome of the one-shot fetch
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Loaded(usize),
    Failed(String),
}

/// The search screen: a fetched user list, filtered by the search box
#[derive(Debug)]
pub struct Screen<P> {
    engine: FilterEngine<P>,
    status: Status,
}

impl<P: Presenter> Screen<P> {
    /// Fetch the users once. Nothing is rendered until the first event or
    /// [`refresh`](Screen::refresh).
    ///
    /// A failed fetch doesn't fail the screen, every later render reports the
    /// failure instead of an empty list.
    pub async fn load<S>(source: &S, presenter: P, empty_message: &str) -> Self
    where
        S: DataSource + ?Sized,
    {
        let (users, status) = match source.fetch().await {
            Ok(users) => {
                let len = users.len();
                (users, Status::Loaded(len))
            }
            Err(err) => {
                let reason = crate::util::summarize(&err);
                log::error!("cannot load users from {}: {}", source.describe(), reason);
                (vec![], Status::Failed(reason))
            }
        };

        Self {
            engine: FilterEngine::new(users, presenter, empty_message),
            status,
        }
    }

    pub fn handle(&mut self, event: Event) -> anyhow::Result<()> {
        log::trace!("event: {:?}", event);
        if let Status::Failed(reason) = &self.status {
            return self.engine.presenter_mut().render_failure(reason);
        }

        match event {
            Event::Query(text) => self.engine.set_query(text),
            Event::Active(active) => self.engine.set_search_active(active),
        }
    }

    /// Search for `text` straight away, rendering once
    pub fn search(&mut self, text: impl Into<String>) -> anyhow::Result<()> {
        if let Status::Failed(reason) = &self.status {
            return self.engine.presenter_mut().render_failure(reason);
        }
        self.engine.search(text)
    }

    /// Render the current state again
    pub fn refresh(&mut self) -> anyhow::Result<()> {
        match &self.status {
            Status::Failed(reason) => self.engine.presenter_mut().render_failure(reason),
            Status::Loaded(..) => self.engine.refresh(),
        }
    }
}

impl<P> Screen<P> {
    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn engine(&self) -> &FilterEngine<P> {
        &self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::testing::*;
    use crate::source::UsersFut;
    use crate::User;
    use futures::prelude::*;

    struct Fixed(Vec<User>);

    impl DataSource for Fixed {
        fn fetch(&self) -> UsersFut<'_> {
            let users = self.0.clone();
            async move { Ok(users) }.boxed()
        }

        fn describe(&self) -> String {
            "fixed".into()
        }
    }

    struct Broken;

    impl DataSource for Broken {
        fn fetch(&self) -> UsersFut<'_> {
            async move { Err::<Vec<User>, _>(anyhow::anyhow!("connection refused")) }.boxed()
        }

        fn describe(&self) -> String {
            "broken".into()
        }
    }

    fn fixed() -> Fixed {
        Fixed(vec![
            User::new(1, "Leanne Graham", "Romaguera-Crona"),
            User::new(2, "Ervin Howell", "Deckow-Crist"),
        ])
    }

    #[test]
    fn parse_input() {
        let tests = vec![
            ("/quit", Input::Quit),
            ("/search", Input::Event(Event::Active(true))),
            ("/cancel", Input::Event(Event::Active(false))),
            ("/clear", Input::Event(Event::Query("".into()))),
            ("ho", Input::Event(Event::Query("ho".into()))),
            ("  Ervin ", Input::Event(Event::Query("  Ervin ".into()))),
            ("/unknown", Input::Event(Event::Query("/unknown".into()))),
            ("ho\r", Input::Event(Event::Query("ho".into()))),
        ];

        for (input, expected) in tests {
            assert_eq!(Input::parse(input), expected, "input: {:?}", input);
        }
    }

    #[tokio::test]
    async fn load_then_refresh() {
        let mut screen = Screen::load(&fixed(), RecordingPresenter::default(), "nobody").await;
        assert!(screen.engine().presenter().calls.is_empty());

        screen.refresh().unwrap();
        assert_eq!(screen.status(), &Status::Loaded(2));
        assert_eq!(
            screen.engine().presenter().names(),
            vec!["Leanne Graham", "Ervin Howell"]
        );
    }

    #[tokio::test]
    async fn search_flow() {
        let mut screen = Screen::load(&fixed(), RecordingPresenter::default(), "nobody").await;
        screen.refresh().unwrap();

        // typing before the search is engaged doesn't filter
        screen.handle(Event::Query("ho".into())).unwrap();
        assert_eq!(screen.engine().len(), 2);

        screen.handle(Event::Active(true)).unwrap();
        assert_eq!(screen.engine().presenter().names(), vec!["Ervin Howell"]);

        screen.handle(Event::Query("nope".into())).unwrap();
        assert_eq!(
            screen.engine().presenter().last(),
            Some(&Rendered::Empty("nobody".into()))
        );

        screen.handle(Event::Active(false)).unwrap();
        assert_eq!(screen.engine().len(), 2);
    }

    #[tokio::test]
    async fn failure_is_not_an_empty_list() {
        let mut screen = Screen::load(&Broken, RecordingPresenter::default(), "nobody").await;
        screen.refresh().unwrap();

        assert_eq!(
            screen.status(),
            &Status::Failed("connection refused".into())
        );
        assert_eq!(
            screen.engine().presenter().calls,
            vec![Rendered::Failure("connection refused".into())]
        );

        screen.handle(Event::Active(true)).unwrap();
        screen.handle(Event::Query("le".into())).unwrap();
        screen.search("le").unwrap();
        assert_eq!(screen.engine().presenter().calls.len(), 4);
        assert!(screen
            .engine()
            .presenter()
            .calls
            .iter()
            .all(|call| matches!(call, Rendered::Failure(..))));
    }

    struct Unreachable;

    impl DataSource for Unreachable {
        fn fetch(&self) -> UsersFut<'_> {
            async move {
                let err = anyhow::anyhow!("Connection refused (os error 111)")
                    .context("tcp connect error: Connection refused (os error 111)")
                    .context("cannot reach `http://127.0.0.1:9/users`");
                Err::<Vec<User>, _>(err)
            }
            .boxed()
        }

        fn describe(&self) -> String {
            "unreachable".into()
        }
    }

    #[tokio::test]
    async fn failure_reason_does_not_repeat_causes() {
        let screen = Screen::load(&Unreachable, RecordingPresenter::default(), "nobody").await;
        let reason = match screen.status() {
            Status::Failed(reason) => reason,
            status => panic!("expected a failure, got {:?}", status),
        };

        assert_eq!(reason.matches("os error 111").count(), 1, "{}", reason);
        assert!(reason.starts_with("cannot reach"), "{}", reason);
    }

    #[tokio::test]
    async fn one_shot_search() {
        let mut screen = Screen::load(&fixed(), RecordingPresenter::default(), "nobody").await;
        screen.search("LEANNE").unwrap();
        assert_eq!(
            screen.engine().presenter().calls,
            vec![Rendered::Rows(vec![(
                "Leanne Graham".into(),
                "Romaguera-Crona".into()
            )])]
        );
    }

    #[tokio::test]
    async fn empty_list_is_not_a_failure() {
        let source = Fixed(vec![]);
        let mut screen = Screen::load(&source, RecordingPresenter::default(), "nobody").await;
        screen.refresh().unwrap();

        assert_eq!(screen.status(), &Status::Loaded(0));
        assert_eq!(
            screen.engine().presenter().calls,
            vec![Rendered::Empty("nobody".into())]
        );
    }
}

use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use std::cell::RefCell;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Canned responses plus a log of every request made.
#[derive(Debug)]
struct FakeApi {
    users: Result<Vec<UserSummary>, ApiError>,
    repos: Result<Vec<RepoSummary>, ApiError>,
    user_repos: Result<Vec<RepoSummary>, ApiError>,
    calls: RefCell<Vec<String>>,
}

impl FakeApi {
    fn new() -> Self {
        Self {
            users: Ok(Vec::new()),
            repos: Ok(Vec::new()),
            user_repos: Ok(Vec::new()),
            calls: RefCell::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl SearchApi for FakeApi {
    fn search_users(&self, term: &str) -> Result<Vec<UserSummary>, ApiError> {
        self.calls.borrow_mut().push(format!("/search/users?q={term}"));
        self.users.clone()
    }

    fn search_repos(&self, term: &str) -> Result<Vec<RepoSummary>, ApiError> {
        self.calls
            .borrow_mut()
            .push(format!("/search/repositories?q={term}"));
        self.repos.clone()
    }

    fn user_repos(&self, login: &str) -> Result<Vec<RepoSummary>, ApiError> {
        self.calls.borrow_mut().push(format!("/users/{login}/repos"));
        self.user_repos.clone()
    }
}

fn user(login: &str) -> UserSummary {
    UserSummary {
        login: login.to_string(),
        avatar_url: format!("https://avatars.example/{login}"),
        profile_url: format!("https://github.com/{login}"),
    }
}

fn repo(full_name: &str) -> RepoSummary {
    RepoSummary {
        full_name: full_name.to_string(),
    }
}

fn not_found() -> ApiError {
    ApiError::Status {
        status: 404,
        reason: "Not Found".to_string(),
    }
}

/// Shared buffer a test subscriber writes formatted events into.
#[derive(Debug, Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        self.0
            .lock()
            .map(|buf| String::from_utf8_lossy(&buf).into_owned())
            .unwrap_or_default()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .map_err(|_| io::Error::other("log buffer poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn controller(api: FakeApi) -> SearchController<FakeApi> {
    SearchController::new(api, EntryList::new(), EntryList::new())
}

fn labels(list: &EntryList) -> Vec<&str> {
    list.entries().iter().map(Entry::label).collect()
}

#[test]
fn test_initial_mode_is_user() {
    let controller = controller(FakeApi::new());
    assert_eq!(controller.mode(), SearchMode::User);
    assert_eq!(controller.submit_label(), "Search Users");
}

#[test]
fn test_toggle_mode_updates_label_and_twice_restores() {
    let mut controller = controller(FakeApi::new());

    assert_eq!(controller.toggle_mode(), SearchMode::Repo);
    assert_eq!(controller.submit_label(), "Search Repos");

    assert_eq!(controller.toggle_mode(), SearchMode::User);
    assert_eq!(controller.submit_label(), "Search Users");
    assert!(controller.api().calls().is_empty());
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n ")]
fn test_blank_term_is_rejected_without_request(#[case] term: &str) {
    let mut controller = controller(FakeApi::new());

    assert_eq!(controller.submit_search(term), Err(SearchError::EmptyTerm));
    assert!(controller.api().calls().is_empty());
    assert_eq!(
        SearchError::EmptyTerm.to_string(),
        "No value submitted"
    );
}

#[test]
fn test_term_is_trimmed_before_request() -> Result<(), SearchError> {
    let mut controller = controller(FakeApi::new());
    controller.submit_search("  octo  ")?;
    assert_eq!(controller.api().calls(), ["/search/users?q=octo"]);
    Ok(())
}

#[test]
fn test_user_search_renders_one_entry_per_item() -> Result<(), SearchError> {
    let mut api = FakeApi::new();
    api.users = Ok(vec![user("octocat"), user("octodog"), user("octopus")]);
    let mut controller = controller(api);

    let rendered = controller.submit_search("octo")?;

    assert_eq!(rendered, 3);
    assert_eq!(controller.primary().len(), 3);
    let users: Vec<&UserEntry> = controller
        .primary()
        .entries()
        .iter()
        .filter_map(|entry| match entry {
            Entry::User(user) => Some(user),
            Entry::Repo(_) => None,
        })
        .collect();
    assert_eq!(users.len(), 3);
    for (user, login) in users.into_iter().zip(["octocat", "octodog", "octopus"]) {
        assert_eq!(user.username, login);
        assert_eq!(user.avatar.src, format!("https://avatars.example/{login}"));
        assert_eq!(user.avatar.alt, format!("{login}'s avatar"));
        assert_eq!(user.profile.href, format!("https://github.com/{login}"));
        assert_eq!(user.profile.target, LinkTarget::External);
    }
    assert!(controller.secondary().is_empty());
    Ok(())
}

#[test]
fn test_repo_search_renders_into_secondary_list() -> Result<(), SearchError> {
    let mut api = FakeApi::new();
    api.users = Ok(vec![user("octocat")]);
    api.repos = Ok(vec![repo("rust-lang/rust"), repo("rust-lang/cargo")]);
    let mut controller = controller(api);

    controller.submit_search("octocat")?;
    controller.toggle_mode();
    let rendered = controller.submit_search("rust")?;

    assert_eq!(rendered, 2);
    assert_eq!(
        labels(controller.secondary()),
        ["rust-lang/rust", "rust-lang/cargo"]
    );
    assert_eq!(labels(controller.primary()), ["octocat"]);
    assert_eq!(
        controller.api().calls(),
        ["/search/users?q=octocat", "/search/repositories?q=rust"]
    );
    Ok(())
}

#[test]
fn test_new_search_replaces_previous_entries() -> Result<(), SearchError> {
    let mut api = FakeApi::new();
    api.users = Ok(vec![user("a"), user("b")]);
    let mut controller = controller(api);
    controller.submit_search("first")?;

    controller.render_users(&[user("c")]);
    assert_eq!(labels(controller.primary()), ["c"]);
    Ok(())
}

#[test]
fn test_activating_user_lists_their_repos() -> Result<(), SearchError> {
    let mut api = FakeApi::new();
    api.users = Ok(vec![user("octocat"), user("octodog")]);
    api.user_repos = Ok(vec![repo("octodog/bark"), repo("octodog/fetch")]);
    let mut controller = controller(api);
    controller.submit_search("octo")?;
    controller.render_repos(&[repo("stale/entry")]);

    controller.primary_mut().select_next();
    let rendered = controller.activate_selected()?;

    assert_eq!(rendered, Some(2));
    assert_eq!(
        controller.api().calls().last().map(String::as_str),
        Some("/users/octodog/repos")
    );
    assert_eq!(
        labels(controller.secondary()),
        ["octodog/bark", "octodog/fetch"]
    );
    Ok(())
}

#[test]
fn test_activating_repo_entry_does_nothing() -> Result<(), SearchError> {
    let mut controller = controller(FakeApi::new());
    let entry = Entry::from(&repo("rust-lang/rust"));

    assert_eq!(controller.activate(&entry)?, None);
    assert_eq!(controller.activate_at(7)?, None);
    assert!(controller.api().calls().is_empty());
    Ok(())
}

#[test]
fn test_failed_user_search_keeps_previous_entries() {
    let mut api = FakeApi::new();
    api.users = Err(not_found());
    let mut controller = controller(api);
    controller.render_users(&[user("kept")]);

    let result = controller.submit_search("octo");

    assert_eq!(result, Err(SearchError::Api(not_found())));
    assert_eq!(labels(controller.primary()), ["kept"]);
}

#[test]
fn test_failed_search_logs_error_with_status_text() {
    let mut api = FakeApi::new();
    api.users = Err(ApiError::Status {
        status: 403,
        reason: "Forbidden".to_string(),
    });
    let mut controller = controller(api);
    let logs = LogBuffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    let result = tracing::subscriber::with_default(subscriber, || controller.submit_search("octo"));

    assert!(result.is_err());
    let output = logs.contents();
    let error_line = output.lines().find(|line| line.contains("ERROR"));
    assert!(
        error_line.is_some_and(|line| {
            line.contains("Error fetching users") && line.contains("Forbidden")
        }),
        "no ERROR line with the status text in: {output}"
    );
}

#[test]
fn test_failed_repo_search_keeps_previous_entries() {
    let mut api = FakeApi::new();
    api.repos = Err(not_found());
    let mut controller = controller(api);
    controller.render_repos(&[repo("kept/repo")]);
    controller.toggle_mode();

    assert!(controller.submit_search("rust").is_err());
    assert_eq!(labels(controller.secondary()), ["kept/repo"]);
}

#[test]
fn test_failed_user_repos_keeps_previous_entries() {
    let mut api = FakeApi::new();
    api.user_repos = Err(ApiError::Decode {
        url: "/users/ghost/repos".to_string(),
        message: "expected array".to_string(),
    });
    let mut controller = controller(api);
    controller.render_repos(&[repo("kept/repo")]);

    let result = controller.show_user_repos("ghost");

    assert!(matches!(result, Err(SearchError::Api(ApiError::Decode { .. }))));
    assert_eq!(labels(controller.secondary()), ["kept/repo"]);
}

#[test]
fn test_into_targets() {
    let mut controller = controller(FakeApi::new());
    controller.render_repos(&[repo("a/b")]);
    let (primary, secondary) = controller.into_targets();
    assert!(primary.is_empty());
    assert_eq!(secondary.len(), 1);
}

#[test]
fn test_normalize_term() {
    assert_eq!(normalize_term("  rust "), Some("rust"));
    assert_eq!(normalize_term(" \t "), None);
}

proptest! {
    #[test]
    fn prop_whitespace_only_terms_never_reach_the_api(term in "[ \t\r\n]{0,16}") {
        let mut controller = controller(FakeApi::new());
        prop_assert_eq!(controller.submit_search(&term), Err(SearchError::EmptyTerm));
        controller.toggle_mode();
        prop_assert_eq!(controller.submit_search(&term), Err(SearchError::EmptyTerm));
        prop_assert!(controller.api().calls().is_empty());
    }

    #[test]
    fn prop_even_number_of_toggles_is_identity(toggles in 0usize..32) {
        let mut controller = controller(FakeApi::new());
        for _ in 0..toggles * 2 {
            controller.toggle_mode();
        }
        prop_assert_eq!(controller.mode(), SearchMode::User);
        prop_assert_eq!(controller.submit_label(), "Search Users");
    }
}

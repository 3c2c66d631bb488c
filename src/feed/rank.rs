use crate::github::types::RepositorySummary;
use std::cmp::Ordering;

/// Repositories actually shown in the grid, best first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RankedFeed {
    entries: Vec<RepositorySummary>,
}

impl RankedFeed {
    pub fn entries(&self) -> &[RepositorySummary] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Drops forks and private repositories, orders by stars then recency, keeps `max_count`.
pub fn rank_repositories(repos: Vec<RepositorySummary>, max_count: usize) -> RankedFeed {
    let mut entries: Vec<RepositorySummary> = repos.into_iter().filter(|r| r.is_eligible()).collect();
    entries.sort_by(compare_popularity);
    entries.truncate(max_count);
    RankedFeed { entries }
}

fn compare_popularity(a: &RepositorySummary, b: &RepositorySummary) -> Ordering {
    b.stargazers_count
        .cmp(&a.stargazers_count)
        .then_with(|| b.updated_at.cmp(&a.updated_at))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    fn names(feed: &RankedFeed) -> Vec<&str> {
        feed.entries().iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_forks_and_private_are_excluded() {
        let mut fork = make_repo("fork", 100, "2024-01-01");
        fork.fork = true;
        let mut private = make_repo("private", 100, "2024-01-01");
        private.private = true;
        let public = make_repo("public", 1, "2024-01-01");

        let feed = rank_repositories(vec![fork, private, public], 6);
        assert_eq!(names(&feed), vec!["public"]);
    }

    #[test]
    fn test_stars_then_recency() {
        let repos = vec![
            make_repo("five", 5, "2024-03-01"),
            make_repo("ten-old", 10, "2024-01-01"),
            make_repo("ten-new", 10, "2024-02-01"),
        ];
        let feed = rank_repositories(repos, 6);
        assert_eq!(names(&feed), vec!["ten-new", "ten-old", "five"]);
    }

    #[test]
    fn test_stars_ten_newest_first_then_five() {
        let repos = vec![
            make_repo("a", 5, "2024-03-01"),
            make_repo("b", 10, "2023-06-01"),
            make_repo("c", 10, "2024-02-01"),
            make_repo("d", 10, "2024-01-01"),
        ];
        let feed = rank_repositories(repos, 6);
        assert_eq!(names(&feed), vec!["c", "d", "b", "a"]);
    }

    #[test]
    fn test_truncates_to_max_count() {
        let repos: Vec<_> = (0..10)
            .map(|i| make_repo(&format!("r{i}"), i, "2024-01-01"))
            .collect();

        let feed = rank_repositories(repos.clone(), 6);
        assert_eq!(feed.len(), 6);
        assert_eq!(feed.entries()[0].name, "r9");

        assert_eq!(rank_repositories(repos.clone(), 20).len(), 10);
        assert!(rank_repositories(repos, 0).is_empty());
    }

    #[test]
    fn test_full_ties_keep_input_order() {
        let repos = vec![
            make_repo("first", 3, "2024-01-01"),
            make_repo("second", 3, "2024-01-01"),
            make_repo("third", 3, "2024-01-01"),
        ];
        let feed = rank_repositories(repos.clone(), 6);
        assert_eq!(names(&feed), vec!["first", "second", "third"]);
        assert_eq!(feed, rank_repositories(repos, 6));
    }

    #[test]
    fn test_only_ineligible_gives_empty_feed() {
        let mut fork = make_repo("fork", 1, "2024-01-01");
        fork.fork = true;
        assert!(rank_repositories(vec![fork], 6).is_empty());
        assert!(rank_repositories(Vec::new(), 6).is_empty());
    }
}

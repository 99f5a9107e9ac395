//! The two shipped configuration revisions.
//!
//! The site configuration evolved in two steps: an initial English scaffold
//! with a single exercises section, and the current German revision with
//! lecture material, a deploy base path, and the full exercise list. Both
//! are kept as complete snapshots; [`current`] is what deployments use.

use crate::nav::NavItem;
use crate::sidebar::{Sidebar, SidebarGroup};
use crate::site::{SiteConfig, SiteMetadata};
use crate::theme::{Footer, SearchConfig, SearchProvider, SocialIcon, SocialLink, ThemeConfig};

/// The initial English scaffold revision.
#[must_use]
pub fn initial() -> SiteConfig {
    SiteConfig {
        meta: SiteMetadata {
            title: "Concurrent Programming".to_owned(),
            description: "Course material for the concurrent programming lectures and exercises."
                .to_owned(),
            base: None,
        },
        theme: ThemeConfig {
            nav: vec![
                NavItem::new("Home", "/"),
                NavItem::new("Exercises", "/exercises/"),
            ],
            sidebar: Sidebar::new().with_section(
                "/exercises/",
                vec![SidebarGroup {
                    text: "Exercises".to_owned(),
                    collapsed: false,
                    items: vec![
                        NavItem::new("Overview", "/exercises/"),
                        NavItem::new("Exercise 2", "/exercises/02-spawning-your-first-processes"),
                        NavItem::new("Exercise 4", "/exercises/04-message-passing-basics"),
                    ],
                }],
            ),
            social_links: vec![SocialLink {
                icon: SocialIcon::Github,
                link: "https://github.com/concurrency-course/material".to_owned(),
            }],
            footer: Some(Footer {
                message: "Released under the MIT License.".to_owned(),
                copyright: "Copyright © 2023 Concurrent Programming Course".to_owned(),
            }),
            search: Some(SearchConfig {
                provider: SearchProvider::Local,
            }),
        },
    }
}

/// The current German revision.
#[must_use]
pub fn current() -> SiteConfig {
    let license_note = "Inhalte lizenziert unter \
        <a href=\"https://creativecommons.org/licenses/by-sa/4.0/\">CC BY-SA 4.0</a>.";

    SiteConfig {
        meta: SiteMetadata {
            title: "Nebenläufige Programmierung".to_owned(),
            description: "Begleitmaterial zur Vorlesung und zu den Übungen.".to_owned(),
            base: Some("/teaching/concurrent/".to_owned()),
        },
        theme: ThemeConfig {
            nav: vec![
                NavItem::new("Startseite", "/"),
                NavItem::new("Vorlesung", "/lectures/"),
                NavItem::new("Übungen", "/exercises/"),
            ],
            sidebar: Sidebar::new()
                .with_section("/lectures/", lecture_groups())
                .with_section("/exercises/", exercise_groups()),
            social_links: vec![SocialLink {
                icon: SocialIcon::Github,
                link: "https://github.com/concurrency-course/material".to_owned(),
            }],
            footer: Some(Footer {
                message: license_note.to_owned(),
                copyright: "Copyright © 2023-2024 Fachbereich Informatik".to_owned(),
            }),
            search: Some(SearchConfig {
                provider: SearchProvider::Local,
            }),
        },
    }
}

/// Sidebar groups for the lecture section.
fn lecture_groups() -> Vec<SidebarGroup> {
    vec![
        SidebarGroup {
            text: "Vorlesung".to_owned(),
            collapsed: false,
            items: vec![NavItem::new("Übersicht", "/lectures/")],
        },
        SidebarGroup {
            text: "Grundlagen".to_owned(),
            collapsed: false,
            items: vec![
                NavItem::new("Prozesse und Nachrichten", "/lectures/01-processes-and-messages"),
                NavItem::new("Synchronisation", "/lectures/02-synchronisation"),
                NavItem::new("Deadlocks", "/lectures/03-deadlocks"),
            ],
        },
        SidebarGroup {
            text: "Vertiefung".to_owned(),
            collapsed: true,
            items: vec![
                NavItem::new("Aktoren", "/lectures/04-actors"),
                NavItem::new("Software Transactional Memory", "/lectures/05-stm"),
                NavItem::new("Verteilte Systeme", "/lectures/06-distributed-systems"),
            ],
        },
    ]
}

/// Sidebar groups for the exercise section.
///
/// Sheet numbering is even because each sheet spans two lecture weeks.
fn exercise_groups() -> Vec<SidebarGroup> {
    vec![
        SidebarGroup {
            text: "Übungen".to_owned(),
            collapsed: false,
            items: vec![NavItem::new("Übersicht", "/exercises/")],
        },
        SidebarGroup {
            text: "Aufgabenblätter".to_owned(),
            collapsed: false,
            items: vec![
                NavItem::new("Exercise 2", "/exercises/02-spawning-your-first-processes"),
                NavItem::new("Exercise 4", "/exercises/04-message-passing-basics"),
                NavItem::new("Exercise 6", "/exercises/06-selective-receive"),
                NavItem::new("Exercise 8", "/exercises/08-timeouts-and-deadlines"),
                NavItem::new("Exercise 10", "/exercises/10-stateful-server-loops"),
                NavItem::new("Exercise 12", "/exercises/12-registering-processes"),
                NavItem::new("Exercise 14", "/exercises/14-links-and-exit-signals"),
                NavItem::new("Exercise 16", "/exercises/16-monitors-and-supervision"),
                NavItem::new("Exercise 18", "/exercises/18-a-simple-supervisor"),
                NavItem::new("Exercise 20", "/exercises/20-worker-pools"),
                NavItem::new("Exercise 22", "/exercises/22-load-balancing-requests"),
                NavItem::new("Exercise 24", "/exercises/24-creating-a-fixed-number-of-servers"),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_both_revisions_validate() {
        assert!(initial().validate().is_ok());
        assert!(current().validate().is_ok());
    }

    #[test]
    fn test_initial_is_minimal() {
        let config = initial();
        assert_eq!(config.meta.title, "Concurrent Programming");
        assert!(config.meta.base.is_none());
        assert_eq!(config.theme.nav.len(), 2);
        assert_eq!(config.theme.sidebar.len(), 1);

        let groups = config.theme.sidebar.section("/exercises/").unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].items.len(), 3);
    }

    #[test]
    fn test_current_metadata() {
        let config = current();
        assert_eq!(config.meta.title, "Nebenläufige Programmierung");
        assert_eq!(config.meta.base.as_deref(), Some("/teaching/concurrent/"));
    }

    #[test]
    fn test_current_nav_order() {
        let nav = current().theme.nav;
        let texts: Vec<&str> = nav.iter().map(|item| item.text.as_str()).collect();
        assert_eq!(texts, ["Startseite", "Vorlesung", "Übungen"]);
        assert_eq!(nav[1].link, "/lectures/");
    }

    #[test]
    fn test_current_exercises_sidebar() {
        let config = current();
        let groups = config.theme.sidebar.for_route("/exercises/").unwrap();

        assert_eq!(groups.len(), 2);

        assert_eq!(groups[0].text, "Übungen");
        assert_eq!(groups[0].items.len(), 1);
        assert_eq!(groups[0].items[0], NavItem::new("Übersicht", "/exercises/"));

        assert_eq!(groups[1].text, "Aufgabenblätter");
        assert_eq!(groups[1].items.len(), 12);
        let last = groups[1].items.last().unwrap();
        assert_eq!(last.text, "Exercise 24");
        assert_eq!(last.link, "/exercises/24-creating-a-fixed-number-of-servers");
    }

    #[test]
    fn test_current_exercise_sheets_ordered() {
        let config = current();
        let groups = config.theme.sidebar.section("/exercises/").unwrap();

        let numbers: Vec<u32> = groups[1]
            .items
            .iter()
            .map(|item| {
                item.link
                    .strip_prefix("/exercises/")
                    .and_then(|slug| slug.split('-').next())
                    .and_then(|n| n.parse().ok())
                    .unwrap()
            })
            .collect();

        let mut sorted = numbers.clone();
        sorted.sort_unstable();
        assert_eq!(numbers, sorted);

        for (number, item) in numbers.iter().zip(&groups[1].items) {
            assert_eq!(item.text, format!("Exercise {number}"));
        }
    }

    #[test]
    fn test_current_lectures_sidebar() {
        let config = current();
        let groups = config.theme.sidebar.for_route("/lectures/").unwrap();

        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].text, "Vorlesung");
        assert!(!groups[0].collapsed);
        assert_eq!(groups[1].text, "Grundlagen");
        assert_eq!(groups[2].text, "Vertiefung");
        assert!(groups[2].collapsed);
    }

    #[test]
    fn test_initial_json_roundtrip() {
        let config = initial();
        let json = config.to_json().unwrap();
        let reparsed: SiteConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(reparsed, config);
    }

    #[test]
    fn test_current_toml_roundtrip() {
        let config = current();
        let toml = config.to_toml().unwrap();
        let reparsed: SiteConfig = toml::from_str(&toml).unwrap();
        assert_eq!(reparsed, config);
    }

    #[test]
    fn test_current_json_roundtrip() {
        let config = current();
        let json = config.to_json_pretty().unwrap();
        let reparsed: SiteConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(reparsed, config);
    }
}

use super::github_stars::GitHubStars;
use dioxus::prelude::*;

pub const FOOTER_REPOSITORY: &str = "exbald/ai-vibe-coding-starter";
pub const FOOTER_CAPTION: &str = "Built with Agentic Coding Boilerplate";

// 页脚: 星标徽章 + 说明文字
#[component]
pub fn SiteFooter() -> Element {
    rsx! {
        footer { class: "border-t py-6 text-center text-sm text-muted-foreground",
            div { class: "container mx-auto px-4",
                div { class: "flex flex-col items-center space-y-3",
                    GitHubStars { repo: FOOTER_REPOSITORY.to_string() }
                    p { "{FOOTER_CAPTION}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::{GitHubError, StarsProvider};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    const STACK_OPEN: &str = r#"<div class="flex flex-col items-center space-y-3">"#;
    const CAPTION_TAIL: &str =
        "<p>Built with Agentic Coding Boilerplate</p></div></div></footer>";

    #[component]
    fn Page(provider: StarsProvider) -> Element {
        use_context_provider(|| provider.clone());
        rsx! {
            SiteFooter {}
        }
    }

    fn new_dom(provider: StarsProvider) -> VirtualDom {
        let mut dom = VirtualDom::new_with_props(Page, PageProps { provider });
        dom.rebuild_in_place();
        dom
    }

    async fn settle(dom: &mut VirtualDom) {
        for _ in 0..4 {
            if tokio::time::timeout(Duration::from_millis(100), dom.wait_for_work())
                .await
                .is_err()
            {
                break;
            }
            let _ = dom.render_immediate_to_vec();
        }
    }

    /// Markup between the flex block's opening tag and the caption.
    fn stars_markup(html: &str) -> &str {
        let start = html.find(STACK_OPEN).expect("flex block") + STACK_OPEN.len();
        let end = html.rfind(CAPTION_TAIL).expect("caption");
        &html[start..end]
    }

    #[test]
    fn renders_layout_and_caption() {
        let dom = new_dom(StarsProvider::new(|_| async { Ok(10) }));
        let html = dioxus_ssr::render(&dom);

        assert!(html.starts_with(
            r#"<footer class="border-t py-6 text-center text-sm text-muted-foreground"><div class="container mx-auto px-4">"#
        ));
        assert!(html.contains(STACK_OPEN));
        assert!(html.ends_with(CAPTION_TAIL), "{html}");
    }

    #[test]
    fn stars_indicator_precedes_caption() {
        let dom = new_dom(StarsProvider::new(|_| async { Ok(10) }));
        let html = dioxus_ssr::render(&dom);
        let stars = stars_markup(&html);

        // one element: the badge link
        assert!(stars.starts_with("<a "), "{stars}");
        assert!(stars.ends_with("</a>"), "{stars}");
        assert_eq!(stars.matches("</a>").count(), 1);
    }

    #[tokio::test]
    async fn passes_repository_to_indicator() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let provider = StarsProvider::new({
            let seen = seen.clone();
            move |repo| {
                seen.borrow_mut().push(repo.to_string());
                async { Ok(3) }
            }
        });
        let mut dom = new_dom(provider);
        settle(&mut dom).await;

        assert_eq!(*seen.borrow(), vec![FOOTER_REPOSITORY.to_string()]);
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("href=\"https://github.com/exbald/ai-vibe-coding-starter\""));
    }

    #[test]
    fn repeated_renders_are_identical() {
        let dom = new_dom(StarsProvider::new(|_| async { Ok(10) }));
        let first = dioxus_ssr::render(&dom);
        let second = dioxus_ssr::render(&dom);
        let fresh = dioxus_ssr::render(&new_dom(StarsProvider::new(|_| async { Ok(10) })));

        assert_eq!(first, second);
        assert_eq!(first, fresh);
    }

    #[tokio::test]
    async fn caption_survives_failing_indicator() {
        let provider = StarsProvider::new(|_| async {
            Err(GitHubError::Request("connection refused".to_string()))
        });
        let mut dom = new_dom(provider);
        settle(&mut dom).await;
        let html = dioxus_ssr::render(&dom);

        assert!(html.ends_with(CAPTION_TAIL), "{html}");
        let stars = stars_markup(&html);
        assert!(stars.contains("Star on GitHub"));
        assert!(!stars.contains("aria-busy"));
    }
}

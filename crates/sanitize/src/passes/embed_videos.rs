// ABOUTME: Turns iframes from known video hosts into lazy, referrer-free responsive embeds.
// ABOUTME: Each embed is wrapped in <div data-guide="video"> unless already wrapped.

use dom_query::{Document, NodeRef};
use url::Url;

use crate::dom::{has_data_attr, is_attached, wrap};
use crate::pipeline::{Pass, PassContext};

pub struct EmbedVideos;

impl Pass for EmbedVideos {
    fn name(&self) -> &'static str {
        "embed-videos"
    }

    fn run(&self, doc: &Document, ctx: &PassContext<'_>) -> usize {
        let hosts = &ctx.options().video_hosts;
        let mut embedded = 0;

        for iframe in doc.select("iframe[src]").nodes().to_vec() {
            if !is_attached(&iframe) {
                continue;
            }
            let Some(src) = iframe.attr("src") else {
                continue;
            };
            if !is_video_src(&src, hosts) {
                continue;
            }

            iframe.set_attr("loading", "lazy");
            iframe.set_attr("referrerpolicy", "no-referrer");
            iframe.set_attr("allowfullscreen", "");

            if !is_wrapped(&iframe) {
                wrap(&iframe, "div", &[("data-guide", "video")]);
            }
            embedded += 1;
        }

        embedded
    }
}

fn is_wrapped(iframe: &NodeRef) -> bool {
    iframe
        .parent()
        .is_some_and(|p| has_data_attr(&p, "data-guide", "video"))
}

/// Host of `src` (protocol-relative URLs assume https) equals a video host or is a subdomain of one.
pub(crate) fn is_video_src(src: &str, hosts: &[String]) -> bool {
    let src = src.trim();
    let parsed = if src.starts_with("//") {
        Url::parse(&format!("https:{}", src))
    } else {
        Url::parse(src)
    };
    let Ok(url) = parsed else {
        return false;
    };
    let Some(host) = url.host_str() else {
        return false;
    };

    let host = host.to_ascii_lowercase();
    hosts.iter().any(|candidate| {
        let candidate = candidate.trim().to_ascii_lowercase();
        !candidate.is_empty()
            && (host == candidate || host.ends_with(&format!(".{}", candidate)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;
    use crate::pipeline::test_support::run_pass;

    #[test]
    fn test_host_matching() {
        let hosts = Options::default().video_hosts;

        assert!(is_video_src("https://www.youtube.com/embed/abc", &hosts));
        assert!(is_video_src("//player.vimeo.com/video/1", &hosts));
        assert!(is_video_src("https://youtu.be/abc", &hosts));
        assert!(!is_video_src("https://notyoutube.com/embed/abc", &hosts));
        assert!(!is_video_src("https://www.twitch.tv/videos/1", &hosts));
        assert!(!is_video_src("/relative/embed", &hosts));
    }

    #[test]
    fn test_wraps_youtube_iframe() {
        let html = run_pass(
            &EmbedVideos,
            r#"<iframe src="https://www.youtube.com/embed/abc" width="560"></iframe>"#,
        );
        assert_eq!(
            html,
            r#"<div data-guide="video"><iframe src="https://www.youtube.com/embed/abc" width="560" loading="lazy" referrerpolicy="no-referrer" allowfullscreen=""></iframe></div>"#
        );
    }

    #[test]
    fn test_ignores_other_iframes() {
        let input = r#"<iframe src="https://example.com/widget"></iframe>"#;
        assert_eq!(run_pass(&EmbedVideos, input), input);
    }

    #[test]
    fn test_does_not_double_wrap() {
        let once = run_pass(
            &EmbedVideos,
            r#"<iframe src="https://clips.twitch.tv/embed?clip=x"></iframe>"#,
        );
        let twice = run_pass(&EmbedVideos, &once);
        assert_eq!(once, twice);
        assert_eq!(twice.matches("data-guide").count(), 1);
    }
}

/// Page rendering
///
/// One parameterized page serves every route. Rendering is a pure function of
/// an optional-field context: the search form is always present, and the
/// recommended grid, result grid (or its no-results notice), and embedded
/// player each appear only when their field is supplied.
use crate::models::VideoSummary;

/// Optional-field input to [`render_page`]. Every field is independently
/// optional; `Default` renders the bare search page.
#[derive(Debug, Default)]
pub struct PageContext {
    pub recommended_videos: Option<Vec<VideoSummary>>,
    pub videos: Option<Vec<VideoSummary>>,
    pub query: Option<String>,
    pub video_url: Option<String>,
}

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>YouTube Search</title>
    <style>
        body {
            font-family: Arial, sans-serif;
            margin: 20px;
            padding: 0;
            background-color: #f8f9fa;
            text-align: center;
        }
        h3 {
            margin-top: 20px;
        }
        form {
            margin-bottom: 20px;
        }
        input[type="text"] {
            padding: 10px;
            width: 60%;
            border: 2px solid #ddd;
            border-radius: 5px;
            font-size: 16px;
        }
        button {
            padding: 10px 15px;
            font-size: 16px;
            border: none;
            background-color: #007bff;
            color: white;
            border-radius: 5px;
            cursor: pointer;
        }
        button:hover {
            background-color: #0056b3;
        }
        .video-grid {
            display: flex;
            flex-wrap: wrap;
            justify-content: center;
            gap: 15px;
            padding: 10px;
        }
        .video-item {
            background: white;
            padding: 10px;
            border-radius: 10px;
            box-shadow: 0 2px 5px rgba(0, 0, 0, 0.1);
            text-align: center;
            width: 250px;
        }
        .video-item img {
            max-width: 100%;
            border-radius: 8px;
        }
        .video-item a {
            text-decoration: none;
            font-weight: bold;
            color: #333;
            display: block;
            margin-top: 8px;
        }
        .video-item a:hover {
            color: #007bff;
        }
        .channel-name {
            font-size: 14px;
            color: #555;
        }
        video {
            margin-top: 20px;
            border-radius: 10px;
        }
    </style>
</head>
<body>

<form action="/search" method="get">
    <input type="text" name="query" placeholder="Search for YouTube videos" required>
    <button type="submit">Search</button>
</form>
"#;

const PAGE_FOOT: &str = "\n</body>\n</html>\n";

/// Render the page for the given context.
pub fn render_page(ctx: &PageContext) -> String {
    let mut page = String::from(PAGE_HEAD);

    if let Some(recommended) = non_empty(&ctx.recommended_videos) {
        push_video_grid(&mut page, "Recommended Videos:", recommended);
    }

    if let Some(videos) = non_empty(&ctx.videos) {
        push_video_grid(&mut page, "Search Results:", videos);
    } else if let Some(query) = &ctx.query {
        page.push_str(&format!(
            "\n<p>No results found for \"{}\".</p>\n",
            escape_html(query)
        ));
    }

    if let Some(video_url) = &ctx.video_url {
        page.push_str(&format!(
            r#"
<video controls autoplay width="650">
    <source src="{}" type="video/mp4">
    Your browser does not support the video tag.
</video>
"#,
            escape_html(video_url)
        ));
    }

    page.push_str(PAGE_FOOT);
    page
}

fn non_empty(videos: &Option<Vec<VideoSummary>>) -> Option<&[VideoSummary]> {
    videos.as_deref().filter(|v| !v.is_empty())
}

fn push_video_grid(page: &mut String, heading: &str, videos: &[VideoSummary]) {
    page.push_str(&format!(
        "\n<h3>{}</h3>\n<div class=\"video-grid\">\n",
        heading
    ));

    for video in videos {
        let watch_href = format!("/watch?url={}", escape_html(&video.url));
        page.push_str(&format!(
            r#"    <div class="video-item">
        <a href="{href}" target="_blank">
            <img src="{thumbnail}" alt="Thumbnail">
        </a>
        <a href="{href}" target="_blank">{title}</a>
        <div class="channel-name">{channel}</div>
    </div>
"#,
            href = watch_href,
            thumbnail = escape_html(&video.thumbnail),
            title = escape_html(&video.title),
            channel = escape_html(&video.channel),
        ));
    }

    page.push_str("</div>\n");
}

/// Escape a value for interpolation into HTML text or attribute positions.
fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(url: &str, title: &str) -> VideoSummary {
        VideoSummary {
            url: url.to_string(),
            title: title.to_string(),
            thumbnail: format!("{}.jpg", title),
            channel: "Channel".to_string(),
        }
    }

    #[test]
    fn test_bare_page_has_form_and_nothing_else() {
        let page = render_page(&PageContext::default());

        assert!(page.contains(r#"<form action="/search" method="get">"#));
        assert!(!page.contains("Recommended Videos:"));
        assert!(!page.contains("Search Results:"));
        assert!(!page.contains("No results found"));
        assert!(!page.contains("<video"));
    }

    #[test]
    fn test_recommended_section_renders_cards() {
        let ctx = PageContext {
            recommended_videos: Some(vec![
                summary("https://www.youtube.com/watch?v=a", "First"),
                summary("https://www.youtube.com/watch?v=b", "Second"),
            ]),
            ..Default::default()
        };
        let page = render_page(&ctx);

        assert!(page.contains("<h3>Recommended Videos:</h3>"));
        assert_eq!(page.matches(r#"class="video-item""#).count(), 2);
        assert!(page.contains(r#"href="/watch?url=https://www.youtube.com/watch?v=a""#));
        assert!(page.contains(r#"<img src="First.jpg" alt="Thumbnail">"#));
        assert!(page.contains(r#"<div class="channel-name">Channel</div>"#));
    }

    #[test]
    fn test_empty_recommended_list_renders_no_section() {
        let ctx = PageContext {
            recommended_videos: Some(vec![]),
            ..Default::default()
        };
        assert!(!render_page(&ctx).contains("Recommended Videos:"));
    }

    #[test]
    fn test_results_and_no_results_are_exclusive() {
        let with_results = PageContext {
            videos: Some(vec![summary("https://www.youtube.com/watch?v=a", "Hit")]),
            query: Some("lofi".to_string()),
            ..Default::default()
        };
        let page = render_page(&with_results);
        assert!(page.contains("<h3>Search Results:</h3>"));
        assert!(!page.contains("No results found"));

        let without_results = PageContext {
            videos: None,
            query: Some("zzz_no_match".to_string()),
            ..Default::default()
        };
        let page = render_page(&without_results);
        assert!(!page.contains("<h3>Search Results:</h3>"));
        assert!(page.contains(r#"No results found for "zzz_no_match"."#));
    }

    #[test]
    fn test_empty_result_list_falls_back_to_no_results_notice() {
        let ctx = PageContext {
            videos: Some(vec![]),
            query: Some("abc".to_string()),
            ..Default::default()
        };
        assert!(render_page(&ctx).contains(r#"No results found for "abc"."#));
    }

    #[test]
    fn test_no_query_no_notice() {
        let page = render_page(&PageContext::default());
        assert!(!page.contains("No results found"));
    }

    #[test]
    fn test_player_uses_exact_source_url() {
        let ctx = PageContext {
            video_url: Some("https://cdn.example/video.mp4".to_string()),
            ..Default::default()
        };
        let page = render_page(&ctx);

        assert!(page.contains(r#"<video controls autoplay width="650">"#));
        assert!(page.contains(r#"<source src="https://cdn.example/video.mp4" type="video/mp4">"#));
    }

    #[test]
    fn test_interpolated_values_are_escaped() {
        let ctx = PageContext {
            query: Some(r#"<script>alert("x")</script>"#.to_string()),
            ..Default::default()
        };
        let page = render_page(&ctx);

        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html(r#"<a href="x">'y'</a>"#), "&lt;a href=&quot;x&quot;&gt;&#x27;y&#x27;&lt;/a&gt;");
        assert_eq!(escape_html("plain"), "plain");
    }
}

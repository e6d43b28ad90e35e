//! Naver Map links and the launcher page that opens the map app.
//!
//! Chat buttons can only open web links, so map buttons point at a small
//! page served by this backend. The page tries the app URL scheme first and
//! falls back to the web map when the app does not take over.

pub const NAVER_MAP_WEB_HOME: &str = "https://map.naver.com/";

const APP_FALLBACK_DELAY_MS: u32 = 1500;

pub fn naver_map_web_url(query: &str) -> String {
    format!(
        "https://map.naver.com/v5/search/{}",
        urlencoding::encode(query)
    )
}

pub fn naver_map_app_url(query: &str, app_name: &str) -> String {
    format!(
        "nmap://search?query={}&appname={}",
        urlencoding::encode(query),
        urlencoding::encode(app_name)
    )
}

/// HTML launcher for `query`. Every interpolated value is escaped for its
/// context (script string literal or HTML text).
pub fn launcher_page(query: &str, app_name: &str) -> String {
    let app_url = naver_map_app_url(query, app_name);
    let web_url = naver_map_web_url(query);

    format!(
        r#"<!DOCTYPE html>
<html lang="ko">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
</head>
<body>
<p>네이버 지도를 여는 중입니다…</p>
<p><a href="{web_href}">앱이 열리지 않으면 여기를 눌러 웹 지도로 보기</a></p>
<script>
var appUrl = {app_js};
var webUrl = {web_js};
var fallback = setTimeout(function () {{ window.location.replace(webUrl); }}, {delay});
document.addEventListener("visibilitychange", function () {{
  if (document.hidden) {{ clearTimeout(fallback); }}
}});
window.location.href = appUrl;
</script>
</body>
</html>
"#,
        title = escape_html(query),
        web_href = escape_html(&web_url),
        app_js = js_string(&app_url),
        web_js = js_string(&web_url),
        delay = APP_FALLBACK_DELAY_MS,
    )
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// JSON string literal that is also safe inside a `<script>` element.
fn js_string(raw: &str) -> String {
    serde_json::Value::String(raw.to_string())
        .to_string()
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_url_encodes_query() {
        assert_eq!(
            naver_map_web_url("경산시 중앙로 1"),
            "https://map.naver.com/v5/search/%EA%B2%BD%EC%82%B0%EC%8B%9C%20%EC%A4%91%EC%95%99%EB%A1%9C%201"
        );
    }

    #[test]
    fn test_app_url_carries_app_name() {
        let url = naver_map_app_url("반곡지", "tour bot");
        assert!(url.starts_with("nmap://search?query=%EB%B0%98"));
        assert!(url.ends_with("&appname=tour%20bot"));
    }

    #[test]
    fn test_launcher_page_contains_both_targets() {
        let page = launcher_page("남매지", "tourbot");
        assert!(page.contains("nmap://search?query="));
        assert!(page.contains("https://map.naver.com/v5/search/"));
        assert!(page.contains("<title>남매지</title>"));
    }

    #[test]
    fn test_launcher_page_escapes_markup() {
        let page = launcher_page("</script><b>x</b>", "tourbot");
        assert!(!page.contains("<b>x</b>"));
        assert!(page.contains("&lt;/script&gt;"));
        assert_eq!(page.matches("</script>").count(), 1);
    }
}

use chrono::Utc;

/// Wraps a rendered body into a self-contained HTML document.
///
/// Every style the SVG fragments rely on is inlined here, so the artifact
/// can be opened from disk with no external assets.
pub(crate) fn html_document(title: &str, body: &str) -> String {
    let generated = Utc::now().format("%Y-%m-%d %H:%M UTC");
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
body {{ font-family: "Helvetica Neue", Arial, sans-serif; margin: 24px; color: #222; }}
h1 {{ font-size: 20px; }}
h2 {{ font-size: 15px; }}
.axis-label {{ font-size: 12px; fill: #555; }}
.annotation {{ font-size: 11px; }}
.legend {{ font-size: 12px; }}
.meta {{ color: #888; font-size: 12px; }}
.grid {{ display: grid; grid-template-columns: 1fr 1fr; gap: 24px; }}
table.metrics {{ border-collapse: collapse; }}
table.metrics th, table.metrics td {{ border: 1px solid #bbb; padding: 6px 14px; text-align: left; font-size: 13px; }}
table.metrics th {{ background: #dbeafe; }}
</style>
</head>
<body>
<h1>{title}</h1>
{body}
<p class="meta">Generated {generated}</p>
</body>
</html>
"#
    )
}

pub const TITLE: &str = "OIDC Explorer";

/// Wrap a body fragment in the shared Bootstrap page shell.
pub fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>&#128274; {title}</title>
  <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css" rel="stylesheet" crossorigin="anonymous">
  <style>
    pre {{ white-space: pre-wrap; word-break: break-word; max-height: 60vh; }}
    code {{ font-family: ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, "Liberation Mono", "Courier New", monospace; }}
  </style>
</head>
<body class="d-flex flex-column min-vh-100">
  <nav class="navbar navbar-dark bg-dark mb-3">
    <div class="container-fluid">
      <span class="navbar-brand">&#128274; {title}</span>
    </div>
  </nav>
  <main class="flex-grow-1">{body}</main>
  <footer class="mt-4 py-3 bg-light border-top small text-muted text-center">
    Diagnostic tool; do not expose to untrusted networks.
  </footer>
</body>
</html>"#
    )
}

/// Escape a value before interpolating it into HTML. Everything shown on
/// the callback page originates from the identity provider's redirect.
pub fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

//! HTML template for the promotion demo landing page.
//!
//! Exports `render_page`, which interpolates one `RenderContext` into the
//! full document. The palette comes from the stage's `EnvironmentProfile`;
//! production additionally gets the heavier visual treatment (wider
//! container, bordered version box, letter-spaced badge) and the feature
//! list. Keep the HTML blob here to avoid runtime template dependencies.
//!
use promotheme::context::RenderContext;

/// Render the complete landing page for one request
///
/// Pure string interpolation over the context; the same context always
/// yields byte-identical output. Interpolated values are not HTML-escaped.
///
/// # Arguments
/// * `ctx` - Resolved stage, visual profile, and version to display
pub fn render_page(ctx: &RenderContext) -> String {
    let prod = ctx.environment.is_prod();

    let bg_color = ctx.profile.bg_color;
    let version_color = ctx.profile.version_color;
    let badge_bg_color = ctx.profile.badge_bg_color;
    let badge_label = ctx.profile.display_name;
    let version = &ctx.version;
    let features = features_block(ctx);

    // Stage-dependent styling: production gets the emphasized layout.
    let container_padding = if prod { "30px" } else { "20px" };
    let container_shadow = if prod {
        "0 3px 15px rgba(0, 0, 0, 0.15)"
    } else {
        "0 2px 10px rgba(0, 0, 0, 0.1)"
    };
    let container_width = if prod { "min-width: 400px;" } else { "" };
    let heading_color = if prod { "#1a535c" } else { "#2c3e50" };
    let heading_margin = if prod { "margin-bottom: 20px;" } else { "" };
    let version_size = if prod { "28px" } else { "24px" };
    let version_frame = if prod {
        "padding: 10px; border: 2px solid #27ae60; border-radius: 6px; display: inline-block;"
    } else {
        ""
    };
    let description_color = if prod { "#546e7a" } else { "#7f8c8d" };
    let description_sizing = if prod {
        "font-size: 16px; line-height: 1.5;"
    } else {
        ""
    };
    let badge_padding = if prod { "8px 16px" } else { "5px 10px" };
    let badge_margin = if prod { "15px" } else { "10px" };
    let badge_spacing = if prod { "letter-spacing: 1px;" } else { "" };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>GitOps Demo App</title>
  <style>
    body {{
      font-family: Arial, sans-serif;
      display: flex;
      flex-direction: column;
      align-items: center;
      justify-content: center;
      height: 100vh;
      margin: 0;
      background-color: {bg_color};
    }}
    .container {{
      text-align: center;
      padding: {container_padding};
      background-color: white;
      border-radius: 8px;
      box-shadow: {container_shadow};
      {container_width}
    }}
    h1 {{
      color: {heading_color};
      {heading_margin}
    }}
    .version {{
      font-size: {version_size};
      font-weight: bold;
      color: {version_color};
      margin: 20px 0;
      {version_frame}
    }}
    .description {{
      color: {description_color};
      {description_sizing}
    }}
    .environment {{
      padding: {badge_padding};
      background-color: {badge_bg_color};
      color: white;
      border-radius: 4px;
      font-weight: bold;
      margin-top: {badge_margin};
      display: inline-block;
      {badge_spacing}
    }}
    .features {{
      margin-top: 20px;
      text-align: left;
    }}
    .feature {{
      margin: 8px 0;
    }}
  </style>
</head>
<body>
  <div class="container">
    <h1>GitOps Promotion Demo</h1>
    <div class="version">Version: {version}</div>
    <p class="description">This is a simple app to demonstrate GitOps promotion across environments</p>
    <div class="environment">{badge_label}</div>{features}
  </div>
</body>
</html>
"#
    )
}

/// Render the feature list for production, one line per feature
///
/// Every other stage gets the empty string; the features block is then
/// omitted from the document entirely.
fn features_block(ctx: &RenderContext) -> String {
    if !ctx.environment.is_prod() {
        return String::new();
    }
    let mut block = String::from("\n    <div class=\"features\">");
    for feature in ctx.profile.features {
        block.push_str("\n      <div class=\"feature\">");
        block.push_str(feature);
        block.push_str("</div>");
    }
    block.push_str("\n    </div>");
    block
}

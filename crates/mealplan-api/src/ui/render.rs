//! HTML rendering for the planner page.
//!
//! Plain string assembly; every interpolated user value goes through
//! [`escape`].

use mealplan_core::{Day, Document, GroceryList};

use super::forms::RecipeForm;

/// Everything one render of the page needs.
pub struct PageView<'a> {
    /// Source of recipes and the plan.
    pub document: &'a Document,
    /// The grocery editor's working copy. Equal to the stored list unless
    /// the user is mid-edit.
    pub grocery: &'a GroceryList,
    /// Values shown in the recipe entry form.
    pub recipe_form: &'a RecipeForm,
    /// Error message shown above the cards.
    pub banner: Option<&'a str>,
}

const STYLE: &str = "
    body { font-family: system-ui, sans-serif; margin: 1.5rem; background: #fafafa; }
    .layout { max-width: 1100px; margin: 0 auto; }
    header p { color: #666; margin-top: -0.5rem; }
    .grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 1rem; }
    .card { background: #fff; border: 1px solid #ddd; border-radius: 8px; padding: 1rem; }
    .card h3 { margin-top: 0; }
    .banner { background: #fdecea; border: 1px solid #f5c2c0; color: #8a1c17; border-radius: 8px; padding: 0.75rem 1rem; margin-bottom: 1rem; }
    input, textarea, select, button { font: inherit; }
    form.recipe-form input:not([type=checkbox]), form.recipe-form textarea { display: block; width: 100%; box-sizing: border-box; margin-bottom: 0.5rem; padding: 0.4rem; }
    .recipe { border-bottom: 1px solid #eee; padding: 0.5rem 0; }
    .recipe.scheduled { background: #eef7ee; border-left: 4px solid #3a8a3a; padding-left: 0.5rem; }
    .recipe .title { font-weight: 600; }
    .recipe .meta, .recipe .planned { color: #666; font-size: 0.9rem; }
    .day { display: flex; gap: 0.5rem; align-items: center; margin-bottom: 0.4rem; }
    .day span { width: 3rem; font-weight: 600; }
    .grocery-item { display: flex; gap: 0.5rem; align-items: center; margin-bottom: 0.4rem; }
    .grocery-item input[type=text] { flex: 1; padding: 0.3rem; }
    .actions { display: flex; gap: 0.5rem; margin-top: 0.6rem; }
    .default-submit { position: absolute; left: -9999px; }
";

/// Render the full planner page.
pub fn page(view: &PageView<'_>) -> String {
    let banner = view
        .banner
        .map(|msg| format!("<div class=\"banner\" role=\"alert\">{}</div>", escape(msg)))
        .unwrap_or_default();

    format!(
        "<!doctype html>
<html lang=\"en\">
<head>
  <meta charset=\"utf-8\" />
  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />
  <title>Weekly Meal Planner</title>
  <style>{STYLE}</style>
</head>
<body>
  <div class=\"layout\">
    <header>
      <h1>Weekly Meal Planner</h1>
      <p>Sun–Thu dinners · GF-friendly · grocery list</p>
    </header>
    {banner}
    <div class=\"grid\">
{}
{}
{}
{}
    </div>
  </div>
</body>
</html>
",
        recipe_form_card(view.recipe_form),
        recipe_list_card(view.document),
        planner_card(view.document),
        grocery_card(view.grocery),
    )
}

fn checked(on: bool) -> &'static str {
    if on {
        " checked"
    } else {
        ""
    }
}

fn recipe_form_card(form: &RecipeForm) -> String {
    format!(
        "<form class=\"card recipe-form\" method=\"post\" action=\"/ui/recipes\">
  <h3>Add Recipe</h3>
  <input name=\"title\" placeholder=\"Title\" value=\"{}\" required />
  <input name=\"url\" placeholder=\"URL\" value=\"{}\" required />
  <input name=\"protein\" placeholder=\"Protein (chicken/veg/beef/etc.)\" value=\"{}\" />
  <input name=\"tags\" placeholder=\"Tags (comma-separated)\" value=\"{}\" />
  <textarea name=\"notes\" placeholder=\"Notes\">{}</textarea>
  <label><input type=\"checkbox\" name=\"kidFriendly\"{} /> Kid-friendly</label>
  <label><input type=\"checkbox\" name=\"glutenFree\"{} /> Gluten-free</label>
  <div class=\"actions\"><button type=\"submit\">Save</button></div>
</form>",
        escape(&form.title),
        escape(&form.url),
        escape(&form.protein),
        escape(&form.tags),
        escape(&form.notes),
        checked(form.kid_friendly()),
        checked(form.gluten_free()),
    )
}

fn recipe_list_card(document: &Document) -> String {
    let scheduled = document.plan.scheduled_ids();
    let mut rows = String::new();
    for recipe in &document.recipes {
        let (class, planned_line) = if scheduled.contains(&recipe.id) {
            let names: Vec<&str> = document
                .plan
                .days_for(&recipe.id)
                .into_iter()
                .map(Day::as_str)
                .collect();
            (
                "recipe scheduled",
                format!("<div class=\"planned\">Planned: {}</div>", names.join(", ")),
            )
        } else {
            ("recipe", String::new())
        };
        rows.push_str(&format!(
            "<div class=\"{class}\" id=\"recipe-{}\">
  <div class=\"title\">{}</div>
  <div class=\"meta\">{}</div>
  {planned_line}
  <a href=\"{}\" target=\"_blank\" rel=\"noreferrer\">Open</a>
</div>
",
            escape(recipe.id.as_str()),
            escape(&recipe.title),
            escape(&recipe.meta_line()),
            escape(link_target(&recipe.url)),
        ));
    }
    if document.recipes.is_empty() {
        rows.push_str("<p class=\"meta\">No recipes yet.</p>");
    }
    format!("<div class=\"card\">\n  <h3>Recipes</h3>\n  <div class=\"recipes\">\n{rows}  </div>\n</div>")
}

/// `url` if it is an http(s) link, otherwise an inert `#`.
fn link_target(url: &str) -> &str {
    let trimmed = url.trim();
    let scheme = trimmed.split_once(':').map(|(scheme, _)| scheme);
    match scheme {
        Some(s) if s.eq_ignore_ascii_case("http") || s.eq_ignore_ascii_case("https") => trimmed,
        _ => "#",
    }
}

fn planner_card(document: &Document) -> String {
    let mut rows = String::new();
    for day in Day::ALL {
        let current = document.plan.recipe_for(day);
        let mut options = format!(
            "<option value=\"\"{}>-- choose --</option>",
            if current.is_none() { " selected" } else { "" }
        );
        for recipe in document.recipes.iter().filter(|r| !r.id.is_blank()) {
            let selected = if current == Some(&recipe.id) { " selected" } else { "" };
            options.push_str(&format!(
                "<option value=\"{}\"{selected}>{}</option>",
                escape(recipe.id.as_str()),
                escape(&recipe.title),
            ));
        }
        rows.push_str(&format!(
            "<form class=\"day\" method=\"post\" action=\"/ui/plan\">
  <input type=\"hidden\" name=\"day\" value=\"{day}\" />
  <span>{day}</span>
  <select name=\"recipe\" onchange=\"this.form.submit()\">{options}</select>
  <noscript><button type=\"submit\">Set</button></noscript>
</form>
"
        ));
    }
    format!("<div class=\"card\">\n  <h3>Weekly Plan (Sun–Thu)</h3>\n{rows}</div>")
}

/// Rows are keyed by position (`id:<n>`, `text:<n>`, `done:<n>`,
/// `remove:<n>`) so the form never depends on ids being unique.
fn grocery_card(items: &GroceryList) -> String {
    let mut rows = String::new();
    for (n, item) in items.items().iter().enumerate() {
        rows.push_str(&format!(
            "<div class=\"grocery-item\">
  <input type=\"hidden\" name=\"id:{n}\" value=\"{}\" />
  <input type=\"text\" name=\"text:{n}\" value=\"{}\" placeholder=\"e.g., chicken thighs\" />
  <label><input type=\"checkbox\" name=\"done:{n}\"{} /> done</label>
  <button type=\"submit\" name=\"action\" value=\"remove:{n}\">x</button>
</div>
",
            escape(item.id.as_str()),
            escape(&item.text),
            checked(item.done),
        ));
    }
    format!(
        "<form class=\"card\" method=\"post\" action=\"/ui/grocery\">
  <h3>Grocery List</h3>
  <button type=\"submit\" name=\"action\" value=\"save\" class=\"default-submit\" tabindex=\"-1\" aria-hidden=\"true\">Save list</button>
{rows}  <div class=\"actions\">
    <button type=\"submit\" name=\"action\" value=\"add\">Add item</button>
    <button type=\"submit\" name=\"action\" value=\"save\">Save list</button>
  </div>
</form>"
    )
}

/// Escape text for use in HTML content and double- or single-quoted
/// attribute values.
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

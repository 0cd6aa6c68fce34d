//! HTML rendering of the forms list and the form builder.
//!
//! All user-supplied text (titles, descriptions, labels, options, ids) goes
//! through [`escape_html`] before it reaches markup.

use crate::model::{listed_forms, FieldType, Form, FormField};
use std::fmt::Write;

/// What the builder view shows
#[derive(Debug, Clone, Copy)]
pub struct BuilderView<'a> {
    pub is_editing: bool,
    pub title: &'a str,
    pub description: &'a str,
    pub fields: &'a [FormField],
    /// Add-field buttons are clickable
    pub fields_enabled: bool,
    /// A draft exists, so the save button updates instead of creating
    pub is_form_created: bool,
}

/// Escape text for use in element content and quoted attributes
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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

/// Render the "Your Forms" list. Forms without fields are not shown.
pub fn render_forms_list(forms: &[Form]) -> String {
    let listed = listed_forms(forms);
    let mut html = String::from("<div class=\"forms-list\">\n<h2 class=\"mb-4\">Your Forms</h2>\n");

    if listed.is_empty() {
        html.push_str("<div class=\"alert alert-info\">No forms created yet.</div>\n");
    } else {
        html.push_str("<div class=\"row row-cols-1 row-cols-md-2 row-cols-lg-3 g-4\">\n");
        for form in listed {
            render_form_card(&mut html, form);
        }
        html.push_str("</div>\n");
    }

    html.push_str("</div>\n");
    html
}

fn render_form_card(html: &mut String, form: &Form) {
    let id = escape_html(&form.id);
    let _ = write!(
        html,
        "<div class=\"col\">\n\
         <div class=\"card h-100\">\n\
         <div class=\"card-body\">\n\
         <h5 class=\"card-title\">{title}</h5>\n\
         <p class=\"card-text\">{description}</p>\n\
         <div class=\"badge bg-primary mb-2\">Fields: {count}</div>\n\
         </div>\n\
         <div class=\"card-footer bg-transparent\">\n\
         <div class=\"btn-group w-100\">\n\
         <button class=\"btn btn-outline-primary\" data-action=\"edit\" data-form-id=\"{id}\">Edit</button>\n\
         <button class=\"btn btn-outline-danger\" data-action=\"delete\" data-form-id=\"{id}\">Delete</button>\n\
         </div>\n\
         </div>\n\
         </div>\n\
         </div>\n",
        title = escape_html(&form.title),
        description = escape_html(&form.description),
        count = form.fields.len(),
    );
}

/// Render the builder card with inputs, rendered fields and buttons
pub fn render_builder(view: &BuilderView) -> String {
    let heading = if view.is_editing {
        "Edit Form"
    } else {
        "Create New Form"
    };
    let save_label = if view.is_editing || view.is_form_created {
        "Update Form"
    } else {
        "Create Form"
    };
    let (button_class, disabled) = if view.fields_enabled {
        ("btn-info", "")
    } else {
        ("btn-secondary", " disabled")
    };

    let mut html = String::new();
    let _ = write!(
        html,
        "<div class=\"form-builder card\">\n\
         <div class=\"card-header bg-primary text-white\">\n\
         <h2 class=\"card-title h5 mb-0\">{heading}</h2>\n\
         </div>\n\
         <div class=\"card-body\">\n\
         <div class=\"mb-3\">\n\
         <label for=\"formTitle\" class=\"form-label\">Form Title</label>\n\
         <input type=\"text\" class=\"form-control\" id=\"formTitle\" placeholder=\"Enter form title\" value=\"{title}\">\n\
         </div>\n\
         <div class=\"mb-3\">\n\
         <label for=\"formDescription\" class=\"form-label\">Form Description</label>\n\
         <textarea class=\"form-control\" id=\"formDescription\" rows=\"3\" placeholder=\"Enter form description\">{description}</textarea>\n\
         </div>\n\
         <div id=\"formFields\" class=\"mb-4\">\n",
        title = escape_html(view.title),
        description = escape_html(view.description),
    );

    for field in view.fields {
        html.push_str(&render_field(field));
    }
    html.push_str("</div>\n<div class=\"d-flex flex-wrap gap-2 mb-3\">\n");

    for kind in FieldType::ALL {
        let _ = writeln!(
            html,
            "<button id=\"add{label}Btn\" class=\"btn {button_class}\"{disabled}>Add {label} Field</button>",
            label = kind.label(),
        );
    }

    let _ = write!(
        html,
        "</div>\n\
         <div class=\"mt-3\">\n\
         <button id=\"saveFormBtn\" class=\"btn btn-success\">{save_label}</button>\n\
         </div>\n\
         </div>\n\
         </div>\n"
    );
    html
}

/// Render one field as a card with its label and inputs
pub fn render_field(field: &FormField) -> String {
    format!(
        "<div class=\"card mb-3\">\n\
         <div class=\"card-body\">\n\
         <h5 class=\"card-title mb-0\">{label}</h5>\n\
         <div class=\"form-field-content\">\n{inputs}</div>\n\
         </div>\n\
         </div>\n",
        label = escape_html(&field.label),
        inputs = field_input_html(field),
    )
}

/// Inputs for a field: one text box, or one input per option
pub fn field_input_html(field: &FormField) -> String {
    match field.kind {
        FieldType::Text => {
            "<div class=\"mb-3\"><input type=\"text\" class=\"form-control\" placeholder=\"Text input\"></div>\n"
                .to_string()
        }
        FieldType::Radio | FieldType::Checkbox => {
            let name = escape_html(&field.id);
            let mut html = String::new();
            for opt in field.option_list() {
                let opt = escape_html(opt);
                let _ = write!(
                    html,
                    "<div class=\"form-check\">\
                     <input class=\"form-check-input\" type=\"{kind}\" name=\"{name}\" value=\"{opt}\">\
                     <label class=\"form-check-label\">{opt}</label>\
                     </div>\n",
                    kind = field.kind.as_str(),
                );
            }
            html
        }
    }
}

/// Wrap a fragment in a standalone page
pub fn render_page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         <link rel=\"stylesheet\" href=\"https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css\">\n\
         </head>\n\
         <body>\n\
         <main class=\"container py-4\" id=\"mainContent\">\n\
         {body}\
         </main>\n\
         </body>\n\
         </html>\n",
        title = escape_html(title),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_field(label: &str, order: usize) -> FormField {
        FormField::new(FieldType::Text, label, None, order)
    }

    fn choice_field(kind: FieldType, label: &str, options: &[&str]) -> FormField {
        FormField::new(
            kind,
            label,
            Some(options.iter().map(|o| o.to_string()).collect()),
            0,
        )
    }

    fn form(title: &str, fields: Vec<FormField>) -> Form {
        let mut form = Form::new(title, "About you");
        form.fields = fields;
        form
    }

    mod escaping {
        use super::*;

        #[test]
        fn test_escape_html_special_chars() {
            assert_eq!(
                escape_html(r#"<a href="x">'&'</a>"#),
                "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
            );
        }

        #[test]
        fn test_plain_text_unchanged() {
            assert_eq!(escape_html("Survey 2024"), "Survey 2024");
        }
    }

    mod forms_list {
        use super::*;

        #[test]
        fn test_empty_list_message() {
            let html = render_forms_list(&[]);
            assert!(html.contains("Your Forms"));
            assert!(html.contains("No forms created yet."));
        }

        #[test]
        fn test_zero_field_forms_are_hidden() {
            let forms = vec![
                form("Hidden draft", vec![]),
                form("Visible", vec![text_field("Name", 0)]),
            ];
            let html = render_forms_list(&forms);
            assert!(html.contains("Visible"));
            assert!(!html.contains("Hidden draft"));
            assert!(!html.contains(&forms[0].id));
            assert!(html.contains("Fields: 1"));
        }

        #[test]
        fn test_only_empty_forms_shows_message() {
            let html = render_forms_list(&[form("Draft", vec![])]);
            assert!(html.contains("No forms created yet."));
        }

        #[test]
        fn test_script_title_is_literal_text() {
            let forms = vec![form(
                "<script>alert(1)</script>",
                vec![text_field("Name", 0)],
            )];
            let html = render_forms_list(&forms);
            assert!(!html.contains("<script>"));
            assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        }

        #[test]
        fn test_cards_carry_form_id_actions() {
            let forms = vec![form("Survey", vec![text_field("Name", 0)])];
            let html = render_forms_list(&forms);
            let id_attr = format!("data-form-id=\"{}\"", forms[0].id);
            assert_eq!(html.matches(&id_attr).count(), 2);
            assert!(html.contains("data-action=\"edit\""));
            assert!(html.contains("data-action=\"delete\""));
        }
    }

    mod fields {
        use super::*;

        #[test]
        fn test_text_field_renders_single_input() {
            let html = field_input_html(&text_field("Name", 0));
            assert_eq!(html.matches("<input").count(), 1);
            assert!(html.contains("type=\"text\""));
            assert!(!html.contains("form-check"));
        }

        #[test]
        fn test_radio_renders_one_input_per_option_in_order() {
            let field = choice_field(FieldType::Radio, "Size", &["small", "medium", "large"]);
            let html = field_input_html(&field);
            assert_eq!(html.matches("type=\"radio\"").count(), 3);
            let small = html.find("value=\"small\"").unwrap();
            let medium = html.find("value=\"medium\"").unwrap();
            let large = html.find("value=\"large\"").unwrap();
            assert!(small < medium && medium < large);
            assert_eq!(html.matches(&format!("name=\"{}\"", field.id)).count(), 3);
        }

        #[test]
        fn test_checkbox_renders_one_input_per_option() {
            let field = choice_field(FieldType::Checkbox, "Toppings", &["cheese", "olives"]);
            let html = field_input_html(&field);
            assert_eq!(html.matches("type=\"checkbox\"").count(), 2);
        }

        #[test]
        fn test_choice_without_options_renders_nothing() {
            let field = choice_field(FieldType::Radio, "Empty", &[]);
            assert!(field_input_html(&field).is_empty());
        }

        #[test]
        fn test_labels_and_options_are_escaped() {
            let field = choice_field(FieldType::Radio, "<b>Pick</b>", &["<i>x</i>"]);
            let html = render_field(&field);
            assert!(!html.contains("<b>"));
            assert!(!html.contains("<i>"));
            assert!(html.contains("&lt;b&gt;Pick&lt;/b&gt;"));
            assert!(html.contains("value=\"&lt;i&gt;x&lt;/i&gt;\""));
        }
    }

    mod builder {
        use super::*;

        fn view<'a>(fields: &'a [FormField]) -> BuilderView<'a> {
            BuilderView {
                is_editing: false,
                title: "",
                description: "",
                fields,
                fields_enabled: false,
                is_form_created: false,
            }
        }

        #[test]
        fn test_create_view_disables_add_buttons() {
            let html = render_builder(&view(&[]));
            assert!(html.contains("Create New Form"));
            assert!(html.contains(">Create Form<"));
            assert_eq!(html.matches(" disabled>").count(), 3);
        }

        #[test]
        fn test_created_draft_enables_buttons() {
            let html = render_builder(&BuilderView {
                fields_enabled: true,
                is_form_created: true,
                ..view(&[])
            });
            assert!(!html.contains(" disabled>"));
            assert!(html.contains(">Update Form<"));
        }

        #[test]
        fn test_edit_view_prefills_escaped_inputs() {
            let fields = vec![text_field("Name", 0)];
            let html = render_builder(&BuilderView {
                is_editing: true,
                title: "Q&A \"night\"",
                description: "</textarea>",
                fields_enabled: true,
                is_form_created: true,
                ..view(&fields)
            });
            assert!(html.contains("Edit Form"));
            assert!(html.contains("value=\"Q&amp;A &quot;night&quot;\""));
            assert!(html.contains("&lt;/textarea&gt;</textarea>"));
            assert!(html.contains("Name"));
        }

        #[test]
        fn test_page_wraps_body() {
            let page = render_page("Forms", "<p>body</p>\n");
            assert!(page.starts_with("<!DOCTYPE html>"));
            assert!(page.contains("<p>body</p>"));
            assert!(page.contains("<title>Forms</title>"));
        }
    }
}

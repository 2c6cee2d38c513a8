use wishlist_core::{
    AppViewModel, FilterView, FormView, ItemRowView, Notice, NoticeLevel, ResultsView,
    CLEARED_TEXT, COPY_HINT_TEXT, EMPTY_LIST_TEXT,
};

use super::constants::*;

const STYLE: &str = "body{font-family:sans-serif;margin:2rem auto;max-width:60rem;padding:0 1rem}\
.notice{padding:.5rem 1rem;margin:.5rem 0;border-radius:.3rem}\
.success{background:#e6f4ea}.info{background:#e8f0fe}.warning{background:#fef7e0}.error{background:#fce8e6}\
.row{display:grid;grid-template-columns:3rem 1fr auto auto;gap:.5rem;align-items:center;margin:.3rem 0}\
form.inline{display:inline}table{border-collapse:collapse;width:100%}\
td,th{border:1px solid #ddd;padding:.3rem .5rem;text-align:left}";

/// Renders the whole page for one view model.
pub fn render_page(view: &AppViewModel) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str(&format!(
        "<!DOCTYPE html><html lang=\"ja\"><head><meta charset=\"utf-8\">\
         <title>🏠 {title}</title><style>{STYLE}</style></head><body>",
        title = escape(PAGE_TITLE)
    ));
    html.push_str(&format!("<h1>{}</h1><hr><h3>{}</h3>", escape(HEADING), escape(TAGLINE)));
    html.push_str(&format!("<h2>{}</h2>", escape(LIST_HEADING)));

    html.push_str(&render_add_form(&view.form));
    for notice in &view.notices {
        html.push_str(&render_notice(notice));
    }
    if view.cleared {
        html.push_str(&render_notice(&Notice::new(NoticeLevel::Success, CLEARED_TEXT)));
    }

    html.push_str(&render_filter_form(&view.filter));
    html.push_str(&format!("<h3>{}</h3>", escape(RESULTS_HEADING)));
    html.push_str(&render_results(&view.results));

    html.push_str(&render_items(&view.items));
    if !view.items.is_empty() {
        html.push_str(&render_list_actions(view.copy_text.as_deref()));
    }

    html.push_str("</body></html>");
    html
}

fn render_notice(notice: &Notice) -> String {
    let class = match notice.level {
        NoticeLevel::Success => "success",
        NoticeLevel::Info => "info",
        NoticeLevel::Warning => "warning",
        NoticeLevel::Error => "error",
    };
    format!(
        "<div class=\"notice {class}\">{}</div>",
        escape(&notice.text)
    )
}

fn render_add_form(form: &FormView) -> String {
    format!(
        "<form method=\"post\" action=\"{ADD_ITEM}\">\
         <p><label>{}<br>{}</label></p>\
         <p><label>{}<br>{}</label></p>\
         <p><label>{}<br><input type=\"text\" name=\"{FIELD_URL}\" placeholder=\"URL\" size=\"60\"></label></p>\
         <button type=\"submit\">{}</button></form>",
        escape(LABEL_SUBMITTER),
        render_select(FIELD_SUBMITTER, &form.submitters, &form.selected_submitter),
        escape(LABEL_CATEGORY),
        render_select(FIELD_CATEGORY, &form.categories, &form.selected_category),
        escape(LABEL_URL),
        escape(BUTTON_ADD),
    )
}

fn render_filter_form(filter: &FilterView) -> String {
    format!(
        "<form method=\"get\" action=\"{PAGE}\">\
         <p><label>{}<br>{}</label></p>\
         <p><label>{}<br>{}</label></p>\
         <button type=\"submit\">{}</button></form>",
        escape(LABEL_FILTER_SUBMITTER),
        render_select(
            FIELD_SUBMITTER,
            &filter.submitter_choices,
            &filter.selected_submitter
        ),
        escape(LABEL_FILTER_CATEGORY),
        render_select(
            FIELD_CATEGORY,
            &filter.category_choices,
            &filter.selected_category
        ),
        escape(BUTTON_FILTER),
    )
}

fn render_select(name: &str, options: &[String], selected: &str) -> String {
    let options: String = options
        .iter()
        .map(|option| {
            let marker = if option == selected { " selected" } else { "" };
            format!(
                "<option value=\"{value}\"{marker}>{value}</option>",
                value = escape(option)
            )
        })
        .collect();
    format!("<select name=\"{name}\">{options}</select>")
}

fn render_results(results: &ResultsView) -> String {
    match results {
        ResultsView::Pending => format!("<p>{}</p>", escape(RESULTS_PENDING)),
        ResultsView::Unavailable(reason) => render_notice(&Notice::new(
            NoticeLevel::Error,
            format!("❌ Google Sheetsの読み込みに失敗しました: {reason}"),
        )),
        ResultsView::Rows(rows) if rows.is_empty() => {
            format!("<p>{}</p>", escape(RESULTS_EMPTY))
        }
        ResultsView::Rows(rows) => {
            let body: String = rows
                .iter()
                .map(|row| {
                    format!(
                        "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                        escape(&row.item),
                        escape(&row.submitter),
                        escape(&row.category)
                    )
                })
                .collect();
            format!(
                "<table><thead><tr><th>{}</th><th>{}</th><th>{}</th></tr></thead>\
                 <tbody>{body}</tbody></table>",
                escape(COLUMN_ITEM),
                escape(COLUMN_SUBMITTER),
                escape(COLUMN_CATEGORY),
            )
        }
    }
}

fn render_items(items: &[ItemRowView]) -> String {
    if items.is_empty() {
        return render_notice(&Notice::new(NoticeLevel::Info, EMPTY_LIST_TEXT));
    }
    items.iter().map(render_item_row).collect()
}

fn render_item_row(row: &ItemRowView) -> String {
    let favorite_label = if row.favorite {
        BUTTON_UNFAVORITE
    } else {
        BUTTON_FAVORITE
    };
    let delete = if row.confirming_delete {
        format!(
            "<span>「{item}」を削除しますか？</span>{}{}",
            action_button(&item_action(CONFIRM_DELETE, row.position), BUTTON_CONFIRM_DELETE),
            action_button(&item_action(CANCEL_DELETE, row.position), BUTTON_CANCEL_DELETE),
            item = escape(&row.text),
        )
    } else {
        action_button(&item_action(REQUEST_DELETE, row.position), BUTTON_DELETE)
    };

    format!(
        "<div class=\"row\"><strong>{position}.</strong><span>{text}</span>{favorite}<span>{delete}</span></div>",
        position = row.position,
        text = escape(&row.text),
        favorite = action_button(&item_action(TOGGLE_FAVORITE, row.position), favorite_label),
    )
}

fn render_list_actions(copy_text: Option<&str>) -> String {
    let mut html = String::from("<hr>");
    html.push_str(&action_button(CLEAR_LIST, BUTTON_CLEAR));
    html.push_str(&action_button(COPY_LIST, BUTTON_COPY));
    if let Some(text) = copy_text {
        html.push_str(&format!("<pre><code>{}</code></pre>", escape(text)));
        html.push_str(&render_notice(&Notice::new(NoticeLevel::Info, COPY_HINT_TEXT)));
    }
    html
}

fn action_button(action: &str, label: &str) -> String {
    format!(
        "<form class=\"inline\" method=\"post\" action=\"{action}\"><button type=\"submit\">{}</button></form>",
        escape(label)
    )
}

/// Route template with `:position` filled in.
fn item_action(template: &str, position: usize) -> String {
    template.replace(":position", &position.to_string())
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

//! Server-side HTML for the home, list and detail pages.

use std::fmt::Write;

use crate::domain::lost_pet::{
    model::{LostPetRecord, Species},
    query::FilterMode,
};
use crate::screens::{
    detail_screen::{BrowsingContext, DetailScreen, NavigationRequest},
    list_screen::{FilterPanel, ListScreen},
};

const TITLE: &str = "PetFinder";

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn page(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n<body>\n{}</body>\n</html>\n",
        TITLE, body
    )
}

fn nav_bar() -> String {
    format!(
        "<nav class=\"nav-bar\"><a href=\"/home\"><span class=\"icon icon-arrow-left\"></span><h1>{}</h1></a></nav>\n",
        TITLE
    )
}

fn species_icon(species: Option<Species>) -> &'static str {
    match species {
        Some(Species::Cat) => "<span class=\"icon icon-cat\"></span>",
        Some(Species::Dog) => "<span class=\"icon icon-dog\"></span>",
        None => "",
    }
}

pub fn render_home_page() -> String {
    page(&format!(
        "{}<main><a class=\"home-link\" href=\"/lost-pets\">Pets perdidos</a></main>\n",
        nav_bar()
    ))
}

fn pet_card(pet: &LostPetRecord) -> String {
    let mut card = String::from("<article class=\"pet-card\">");
    if let Some(image_url) = &pet.image_url {
        let _ = write!(
            card,
            "<img src=\"{}\" alt=\"{}\">",
            escape_html(image_url),
            escape_html(pet.name.as_deref().unwrap_or_default())
        );
    }
    let _ = write!(
        card,
        "<h3>{}{}</h3><p>{}</p>",
        species_icon(pet.species_icon()),
        escape_html(pet.name.as_deref().unwrap_or_default()),
        escape_html(pet.location.as_deref().unwrap_or_default())
    );
    card.push_str("</article>");

    match pet.detail_path() {
        Some(path) => format!("<a href=\"{}\">{}</a>\n", escape_html(&path), card),
        None => format!("{}\n", card),
    }
}

fn filter_bar(mode: FilterMode, draft: &str) -> String {
    format!(
        "<form class=\"filter-bar\" method=\"get\" action=\"/lost-pets\">\
         <input type=\"hidden\" name=\"mode\" value=\"{}\">\
         <input type=\"text\" name=\"value\" placeholder=\"{}\" value=\"{}\">\
         </form>\n\
         <a class=\"filter-reset\" href=\"/lost-pets\"><span class=\"icon icon-x\"></span></a>\n",
        mode.as_str(),
        escape_html(mode.placeholder()),
        escape_html(draft)
    )
}

fn filter_menu() -> String {
    let mut menu = String::from("<div class=\"filter-menu\">");
    for mode in [FilterMode::Location, FilterMode::Breed] {
        let _ = write!(
            menu,
            "<a href=\"/lost-pets?mode={}\">{}</a>",
            mode.as_str(),
            escape_html(mode.menu_label())
        );
    }
    menu.push_str("</div>\n");
    menu
}

pub fn render_list_page(screen: &ListScreen) -> String {
    if screen.is_loading() {
        return page("<div>Loading...</div>\n");
    }

    let mut body = String::new();
    if let FilterPanel::Active(mode) = screen.panel() {
        body.push_str(&filter_bar(mode, screen.draft()));
    }

    body.push_str("<main class=\"pet-list\">\n");
    for pet in screen.visible_records() {
        body.push_str(&pet_card(pet));
    }
    body.push_str("</main>\n");

    if screen.is_menu_open() {
        body.push_str(&filter_menu());
    }

    let toggle_href = if screen.is_menu_open() {
        "/lost-pets"
    } else {
        "/lost-pets?panel=menu"
    };
    let _ = writeln!(
        body,
        "<a class=\"filter-toggle\" href=\"{}\"><span class=\"icon icon-filter\"></span></a>",
        toggle_href
    );

    page(&body)
}

fn action_link(request: &NavigationRequest, label: &str, class: &str) -> String {
    let target = match request.target {
        BrowsingContext::Current => "",
        BrowsingContext::New => " target=\"_blank\" rel=\"noopener\"",
    };
    format!(
        "<a class=\"{}\" href=\"{}\"{}>{}</a>",
        class,
        escape_html(&request.uri),
        target,
        label
    )
}

pub fn render_detail_page(screen: &DetailScreen) -> String {
    let mut body = nav_bar();

    let Some(view) = screen.view() else {
        return page(&body);
    };

    body.push_str("<section class=\"pet-detail\">\n");
    if let Some(image_url) = &view.image_url {
        let _ = writeln!(
            body,
            "<img src=\"{}\" alt=\"{}\">",
            escape_html(image_url),
            escape_html(&view.name)
        );
    }
    let _ = writeln!(
        body,
        "<h3 class=\"pet-name\">{}{}</h3>",
        species_icon(view.species_icon),
        escape_html(&view.name)
    );

    if view.reward_banner {
        body.push_str("<div class=\"reward-banner\"><span class=\"icon icon-money\"></span>Recompensa disponível</div>\n");
    }

    let _ = writeln!(body, "<p><strong>Dono</strong> {}</p>", escape_html(&view.contact_name));
    let _ = writeln!(body, "<p><strong>Telefone</strong> {}</p>", escape_html(&view.phone));
    if let Some(message) = &view.message {
        let _ = writeln!(body, "{}", action_link(message, "Conversar no WhatsApp", "action-message"));
    }
    if let Some(call) = &view.call {
        let _ = writeln!(body, "{}", action_link(call, "Ligar", "action-call"));
    }
    let _ = writeln!(body, "<p>Último local visto: {}</p>", escape_html(&view.location));
    let _ = writeln!(body, "<p>Data em que sumiu: {}</p>", escape_html(&view.last_seen_date));
    let _ = writeln!(body, "<p>Mais Informações: {}</p>", escape_html(&view.description));
    body.push_str("</section>\n");

    page(&body)
}

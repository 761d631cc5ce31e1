//! Dashboard Page
//!
//! Assembles the single dashboard page: sidebar with the input form and the
//! active user line, then the sales chart, the performance chart, the
//! customer map and the welcome message.
//!
//! The form submits on every change, so each interaction re-runs the whole
//! pipeline for the new inputs.

use crate::data::Dataset;
use crate::prefs::{Month, UserPreferences, Year};

use super::table::TableKind;

pub const PAGE_TITLE: &str = "Dashboard Interactivo de DataTech Solutions";
pub const PAGE_SUBTITLE: &str = "Análisis de ventas, rendimiento de empleados y clientes";

/// Everything the page needs from one run
pub struct PageContext<'a> {
    pub prefs: &'a UserPreferences,
    pub dataset: &'a Dataset,
    pub sales_chart: &'a str,
    pub performance_chart: &'a str,
    pub map_html: &'a str,
}

/// Success message greeting the user by name
pub fn welcome_message(display_name: &str) -> String {
    format!(
        "¡Bienvenido, {}! Esperamos que disfrutes del análisis.",
        display_name
    )
}

/// Sidebar line naming the active user, as HTML
pub fn active_user_line(display_name: &str) -> String {
    format!(
        "&#128100; Usuario activo: <b>{}</b>",
        ammonia::clean_text(display_name)
    )
}

/// Render the complete HTML document
pub fn render_page(ctx: &PageContext<'_>) -> String {
    let prefs = ctx.prefs;
    let summary = ctx.dataset.summary();

    let mut html = String::with_capacity(16 * 1024);

    html.push_str(&format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{css}</style>
</head>
<body>
<aside class="sidebar">
<h2>Configuración</h2>
"#,
        title = PAGE_TITLE,
        css = STYLE
    ));

    html.push_str(&sidebar_form(prefs));

    html.push_str(&format!(
        "<p class=\"period\">Periodo seleccionado: {}/{}</p>\n<p class=\"active-user\">{}</p>\n</aside>\n",
        prefs.month().value(),
        prefs.year().value(),
        active_user_line(prefs.display_name())
    ));

    html.push_str(&format!(
        "<main>\n<h1>{}</h1>\n<h2>{}</h2>\n",
        PAGE_TITLE, PAGE_SUBTITLE
    ));

    html.push_str(&format!(
        "<section class=\"summary\">\n<div><span>Ventas totales</span><strong>{}</strong></div>\n<div><span>Mejor mes</span><strong>{}</strong></div>\n<div><span>Rendimiento medio</span><strong>{:.1}%</strong></div>\n</section>\n",
        summary.total_sales,
        summary.best_month.unwrap_or("-"),
        summary.average_score
    ));

    html.push_str(&format!(
        "<section>\n<h3>Ventas Mensuales</h3>\n<figure class=\"chart\" id=\"sales-chart\">\n{}</figure>\n</section>\n",
        ctx.sales_chart
    ));

    html.push_str(&format!(
        "<section>\n<h3>Rendimiento de Empleados</h3>\n<figure class=\"chart\" id=\"performance-chart\">\n{}</figure>\n</section>\n",
        ctx.performance_chart
    ));

    html.push_str(&format!(
        "<section>\n<h3>&#127757; Distribución Geográfica de Clientes</h3>\n{}</section>\n",
        ctx.map_html
    ));

    html.push_str(&format!(
        "<div class=\"success\" role=\"status\">{}</div>\n",
        ammonia::clean_text(&welcome_message(prefs.display_name()))
    ));

    html.push_str(&data_links(prefs));
    html.push_str("</main>\n</body>\n</html>\n");

    html
}

fn sidebar_form(prefs: &UserPreferences) -> String {
    let year_options: String = Year::ALL
        .iter()
        .map(|y| option(&y.to_string(), *y == prefs.year()))
        .collect();

    let month_options: String = Month::all()
        .map(|m| option(&m.to_string(), m == prefs.month()))
        .collect();

    format!(
        r#"<form method="get" action="/" onchange="this.submit()">
<label for="name">Ingresa tu nombre</label>
<input type="text" id="name" name="name" value="{name}">
<label for="year">Selecciona el año</label>
<select id="year" name="year">
{years}</select>
<label for="month">Selecciona el mes</label>
<select id="month" name="month">
{months}</select>
<label for="color">Selecciona el color del gráfico</label>
<input type="color" id="color" name="color" value="{color}">
<button type="submit">Aplicar</button>
</form>
"#,
        name = ammonia::clean_text(prefs.display_name()),
        years = year_options,
        months = month_options,
        color = prefs.chart_color()
    )
}

fn option(value: &str, selected: bool) -> String {
    format!(
        "<option value=\"{v}\"{s}>{v}</option>\n",
        v = value,
        s = if selected { " selected" } else { "" }
    )
}

fn data_links(prefs: &UserPreferences) -> String {
    let query = format!(
        "name={}&year={}&month={}&color={}",
        urlencoding::encode(prefs.display_name()),
        prefs.year(),
        prefs.month(),
        urlencoding::encode(prefs.chart_color().as_str())
    );

    let mut links = format!(
        "<nav class=\"data-links\">\n<a href=\"/api/v1/dataset?{}\">JSON</a>\n",
        query.replace('&', "&amp;")
    );
    for kind in TableKind::ALL {
        links.push_str(&format!(
            "<a href=\"/api/v1/export?table={k}\">{k}.csv</a>\n",
            k = kind
        ));
    }
    links.push_str("</nav>\n");
    links
}

const STYLE: &str = "\
body{margin:0;display:flex;font-family:sans-serif;color:#262730;background:#fff}\
.sidebar{width:260px;min-height:100vh;padding:1.5rem;background:#f0f2f6;box-sizing:border-box}\
.sidebar label{display:block;margin-top:1rem;font-size:.9rem}\
.sidebar input,.sidebar select{width:100%;margin-top:.3rem;box-sizing:border-box}\
.sidebar button{margin-top:1rem}\
main{flex:1;padding:2rem 3rem;max-width:900px}\
.summary{display:flex;gap:1rem}\
.summary div{flex:1;padding:.8rem;border-radius:6px;background:#f7f7f9}\
.summary span{display:block;font-size:.8rem;color:#666}\
.chart{margin:0}\
.success{margin:2rem 0;padding:1rem;border-radius:6px;background:#d4edda;color:#155724}\
.data-links a{margin-right:1rem;font-size:.85rem}";

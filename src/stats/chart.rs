//! Chart generation and rendering for the stats page.
//!
//! The spending chart is generated as JSON configuration for the ECharts
//! library and rendered into an HTML container by a small initialization
//! script.

use charming::{
    Chart,
    component::{Axis, Grid, Title},
    element::{AxisLabel, AxisPointer, AxisPointerType, AxisType, JsFunction, Tooltip, Trigger},
    series::Line,
};
use maud::{Markup, PreEscaped, html};

use crate::html::HeadElement;

/// A chart with its HTML container ID and ECharts configuration.
pub(super) struct StatsChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Renders the HTML container for a stats chart.
pub(super) fn chart_view(chart: &StatsChart) -> Markup {
    html!(
        div
            id=(chart.id)
            class="min-h-[250px] w-full rounded dark:bg-gray-100"
        {}
    )
}

/// Generates JavaScript initialization code for a stats chart.
///
/// Creates a script that initializes the ECharts instance with responsive
/// resizing once the page has loaded.
pub(super) fn chart_script(chart: &StatsChart) -> HeadElement {
    let script = format!(
        r#"document.addEventListener('DOMContentLoaded', function() {{
            const chartDom = document.getElementById("{}");
            const chart = echarts.init(chartDom);
            chart.setOption({});

            window.addEventListener('resize', chart.resize);
        }});"#,
        chart.id, chart.options
    );

    HeadElement::ScriptSource(PreEscaped(script))
}

/// Builds the spending-over-time line chart.
///
/// `points` pairs an epoch-millisecond x coordinate with the expense total
/// for that day. An empty slice produces a chart with an empty series, which
/// ECharts renders as axes with no line.
pub(super) fn daily_expense_chart(points: &[(f64, f64)]) -> Chart {
    let data: Vec<Vec<f64>> = points.iter().map(|&(x, y)| vec![x, y]).collect();

    Chart::new()
        .title(Title::new().text("Spending").subtext("Daily expense totals"))
        .tooltip(currency_tooltip())
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Time))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(Line::new().name("Expenses").data(data))
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}

#[cfg(test)]
mod tests {
    use super::{StatsChart, chart_view, daily_expense_chart};

    #[test]
    fn chart_options_contain_the_points() {
        let chart = daily_expense_chart(&[(0.0, 5.0), (86_400_000.0, 50.0)]);

        let options = chart.to_string();
        assert!(options.contains("86400000"));
        assert!(options.contains("Expenses"));
    }

    #[test]
    fn empty_points_still_produce_a_chart() {
        let chart = daily_expense_chart(&[]);

        let options = chart.to_string();
        assert!(options.contains("Spending"));
    }

    #[test]
    fn container_uses_the_chart_id() {
        let chart = StatsChart {
            id: "spending-chart",
            options: String::new(),
        };

        let html = chart_view(&chart).into_string();
        assert!(html.contains("id=\"spending-chart\""));
    }
}

#[macro_use]
extern crate log;

use bar_plot::{hbar_plot, ms_to_hours, save_figure, Figure, HbarOptions, Table, Value};
use dialoguer::{theme::ColorfulTheme, Select};

const FIGURE_DIMS: (u32, u32) = (900, 600);

pub(crate) fn main() {
    pretty_env_logger::init();

    let trips = Table::from_csv_path("data/trips.csv").unwrap();
    info!("loaded {} trips", trips.len());

    let measures = vec!["duration_hrs", "distance_km"];
    let m = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select measure")
        .items(&measures)
        .default(0)
        .interact()
        .unwrap();

    let (table, options) = match m {
        0 => {
            let routes = trips.labels("route").unwrap();
            let durations = trips.numbers("duration_ms").unwrap();
            let mut hours = Table::new(vec!["route".to_owned(), "duration_hrs".to_owned()]);
            for (route, ms) in routes.into_iter().zip(durations) {
                hours
                    .push_row(vec![Value::Text(route), Value::Number(ms_to_hours(ms))])
                    .unwrap();
            }
            (
                hours,
                HbarOptions {
                    xlabel: Some("duration [hrs]".to_owned()),
                    ylabel: Some("route".to_owned()),
                    title: Some("Trip duration by route".to_owned()),
                    ..Default::default()
                },
            )
        }
        1 => (
            trips,
            HbarOptions {
                xlabel: Some("distance [km]".to_owned()),
                ylabel: Some("route".to_owned()),
                title: Some("Trip distance by route".to_owned()),
                ..Default::default()
            },
        ),
        _ => unreachable!(),
    };

    let mut fig = Figure::new(FIGURE_DIMS).unwrap();
    hbar_plot(&fig.area(), "route", measures[m], &table, &options).unwrap();

    std::fs::create_dir_all("img").unwrap();
    save_figure(&fig, "img/trips.png").unwrap();
}

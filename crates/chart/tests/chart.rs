//! Integration tests against the sample NuDat export

use nuchart_chart::{
    annotate, annotate_area, classify, read_cells, write_cells, Axis, ChartArea, ChartCell, Rgb,
    Scheme,
};
use nuchart_nudat::Dataset;
use rstest::{fixture, rstest};

#[fixture]
fn dataset() -> Dataset {
    Dataset::read_json("../../data/nudat_sample.json").unwrap()
}

fn label(cells: &[ChartCell], dataset: &Dataset, symbol: &str) -> String {
    let nuclide = dataset.get(symbol).unwrap();
    cells
        .iter()
        .find(|cell| cell.z == nuclide.z && cell.n == nuclide.n)
        .map(|cell| cell.label.clone())
        .unwrap()
}

#[rstest]
#[case("1n", "100s")]
#[case("1H", "ST")]
#[case("3H", "10Ms")]
#[case("5He", "SU")]
#[case("8Be", "l100ns")]
#[case("14B", "10ms")]
#[case("26O", "UN")]
#[case("39Na", "UN")]
#[case("40K", "1e15s")]
#[case("60Co", "10Ms")]
#[case("100Sn", "1s")]
#[case("212Bi", "1ks")]
#[case("232Th", "1e15s")]
fn half_life_buckets(dataset: Dataset, #[case] symbol: &str, #[case] expected: &str) {
    let cells = classify(&dataset, Axis::HalfLife);
    assert_eq!(label(&cells, &dataset, symbol), expected);
}

#[rstest]
#[case("1n", "B-")]
#[case("1H", "STABLE")]
#[case("4He", "UNKNOWN")]
#[case("5He", "N")]
#[case("14B", "B-")]
#[case("26O", "UNKNOWN")]
#[case("39Na", "UNKNOWN")]
#[case("40K", "B-")]
#[case("100Sn", "EC")]
#[case("212Bi", "B-")]
#[case("238U", "A")]
fn dominant_decay_modes(dataset: Dataset, #[case] symbol: &str, #[case] expected: &str) {
    let cells = classify(&dataset, Axis::DecayMode);
    assert_eq!(label(&cells, &dataset, symbol), expected);
}

#[rstest]
#[case(Axis::HalfLife)]
#[case(Axis::DecayMode)]
fn every_label_has_a_colour(dataset: Dataset, #[case] axis: Axis) {
    let scheme = Scheme::from(axis);
    let cells = classify(&dataset, axis);
    assert_eq!(cells.len(), dataset.len());
    for cell in &cells {
        assert!(scheme.colour(&cell.label).is_some(), "{}", cell.label);
    }
}

#[rstest]
fn light_corner_of_the_chart(dataset: Dataset) {
    let cells = classify(&dataset, Axis::HalfLife);
    let area = ChartArea::new(0, 2, 0, 3).unwrap();

    let selected: Vec<&str> = area
        .select(&cells)
        .iter()
        .map(|cell| cell.label.as_str())
        .collect();
    assert_eq!(selected, vec!["100s", "ST", "ST", "10Ms", "ST", "SU"]);

    let grid = area.colour_grid(&cells, Scheme::HalfLife);
    assert_eq!(grid.get(0, 1), Some(Rgb(99, 198, 222)));
    assert_eq!(grid.get(1, 0), Some(Rgb::BLACK));
    assert_eq!(grid.get(1, 2), Some(Rgb(49, 82, 165)));
    assert_eq!(grid.get(2, 3), Some(Rgb(255, 148, 115)));
    assert_eq!(grid.get(0, 0), Some(Rgb::WHITE));
    assert_eq!(grid.get(2, 3).map(|c| c.text_colour()), Some(Rgb::BLACK));
}

#[rstest]
fn thorium_annotation(dataset: Dataset) {
    let text = annotate(dataset.get("232Th").unwrap());
    assert_eq!(text.name, "232Th");
    assert_eq!(text.half_life, "1.40e+10 y");
    assert_eq!(text.decay_modes, vec!["A = 100%", "SF ≤ 1.10e-09%"]);
}

#[rstest]
fn cobalt_annotation_uses_ground_state(dataset: Dataset) {
    let text = annotate(dataset.get("60Co").unwrap());
    assert_eq!(text.half_life, "5.2714 y");
    assert_eq!(text.decay_modes, vec!["B- = 100%"]);
    assert_eq!(text.detail(), "5.2714 y\n\nB- = 100%");
}

#[rstest]
fn annotations_in_area(dataset: Dataset) {
    let area = ChartArea::new(80, 118, 0, 177).unwrap();
    let names: Vec<String> = annotate_area(&dataset, &area)
        .into_iter()
        .map(|text| text.name)
        .collect();
    assert_eq!(names, vec!["212Bi", "232Th", "238U"]);
}

#[rstest]
fn cells_round_trip_through_a_file(dataset: Dataset) {
    let cells = classify(&dataset, Axis::DecayMode);
    let path = std::env::temp_dir().join("nuchart_chart_cells_test.json");

    write_cells(&path, &cells).unwrap();
    let read = read_cells(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(read, cells);
}

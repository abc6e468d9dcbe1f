//! Integration tests for reference data construction and input

use rstest::{fixture, rstest};
use xstools_data::{
    Error, Library, Material, NuclideGridPoint, NuclideTable, XsKind, XsVector,
};

fn point(energy: f64, total: f64) -> NuclideGridPoint {
    NuclideGridPoint::new(energy, XsVector::from([total, 0.5 * total, 0.5 * total, 0.0, 0.0]))
}

#[fixture]
fn library_json() -> String {
    r#"{
        "nuclides": [
            [
                {"energy": 1.0, "total": 2.0, "elastic": 1.0, "absorption": 1.0, "fission": 0.0, "nu_fission": 0.0},
                {"energy": 3.0, "total": 4.0, "elastic": 2.0, "absorption": 2.0, "fission": 0.0, "nu_fission": 0.0}
            ],
            [
                {"energy": 0.5, "total": 9.0, "elastic": 1.0, "absorption": 8.0, "fission": 6.0, "nu_fission": 15.0},
                {"energy": 2.0, "total": 7.0, "elastic": 1.0, "absorption": 6.0, "fission": 4.0, "nu_fission": 10.0},
                {"energy": 4.0, "total": 5.0, "elastic": 1.0, "absorption": 4.0, "fission": 2.0, "nu_fission": 5.0}
            ]
        ],
        "materials": [
            {"constituents": [{"nuclide": 0, "concentration": 1.0}]},
            {"constituents": [{"nuclide": 1, "concentration": 0.25}, {"nuclide": 0, "concentration": 2.0}]},
            {"constituents": []}
        ]
    }"#
    .to_string()
}

#[rstest]
fn parse_library(library_json: String) {
    let library = Library::from_json_str(&library_json).unwrap();

    assert_eq!(library.nuclides.len(), 2);
    assert_eq!(library.total_points(), 5);
    assert_eq!(library.materials.len(), 3);
    assert!(library.materials[2].is_empty());

    // constituent order is kept exactly
    let nuclides = library.materials[1]
        .iter()
        .map(|c| c.nuclide)
        .collect::<Vec<usize>>();
    assert_eq!(nuclides, vec![1, 0]);

    let row = library.nuclides[1].points()[0];
    assert_eq!(row.xs()[XsKind::NuFission], 15.0);
}

#[rstest]
fn read_library_from_file(library_json: String) {
    let path = std::env::temp_dir().join("xstools_data_read_library_from_file.json");
    std::fs::write(&path, &library_json).unwrap();

    let library = xstools_data::read_json(&path).unwrap();
    assert_eq!(library, Library::from_json_str(&library_json).unwrap());

    std::fs::remove_file(&path).unwrap();
}

#[rstest]
fn missing_file_is_io_error() {
    let result = xstools_data::read_json("./does/not/exist.json");
    assert!(matches!(result, Err(Error::IOError(_))));
}

#[rstest]
fn library_survives_serialisation(library_json: String) {
    let library = Library::from_json_str(&library_json).unwrap();
    let text = serde_json::to_string(&library).unwrap();
    assert_eq!(Library::from_json_str(&text).unwrap(), library);
}

#[rstest]
#[case(r#"[{"energy": 1.0, "total": 1.0, "elastic": 0.0, "absorption": 0.0, "fission": 0.0, "nu_fission": 0.0}]"#)]
#[case(r#"[
    {"energy": 2.0, "total": 1.0, "elastic": 0.0, "absorption": 0.0, "fission": 0.0, "nu_fission": 0.0},
    {"energy": 1.0, "total": 1.0, "elastic": 0.0, "absorption": 0.0, "fission": 0.0, "nu_fission": 0.0}
]"#)]
fn reject_bad_tables(#[case] table: &str) {
    let json = format!(r#"{{"nuclides": [{table}]}}"#);
    assert!(matches!(
        Library::from_json_str(&json),
        Err(Error::FailedSerde(_))
    ));
}

#[rstest]
fn table_errors_carry_context() {
    let result = NuclideTable::new(vec![point(1.0, 1.0), point(3.0, 1.0), point(2.0, 1.0)]);
    match result {
        Err(Error::InvalidTable(xstools_utils::Error::NotAscending { index, .. })) => {
            assert_eq!(index, 2)
        }
        other => panic!("unexpected result {other:?}"),
    }
}

#[rstest]
#[case(vec![point(1.0, 1.0), point(1.0, 2.0)], 0)]
#[case(vec![point(1.0, 1.0), point(2.0, 2.0), point(2.0, 5.0)], 1)]
#[case(vec![point(1.0, 1.0), point(2.0, 2.0), point(2.0, 3.0), point(2.0, 5.0)], 2)]
fn reject_step_as_final_interval(#[case] rows: Vec<NuclideGridPoint>, #[case] expected: usize) {
    match NuclideTable::new(rows) {
        Err(Error::InvalidTable(xstools_utils::Error::ZeroWidthFinalInterval { index, value })) => {
            assert_eq!(index, expected);
            assert!(value > 0.0);
        }
        other => panic!("unexpected result {other:?}"),
    }
}

#[rstest]
fn step_as_final_interval_rejected_on_input() {
    let json = r#"{"nuclides": [[
        {"energy": 1.0, "total": 1.0, "elastic": 0.0, "absorption": 0.0, "fission": 0.0, "nu_fission": 0.0},
        {"energy": 2.0, "total": 2.0, "elastic": 0.0, "absorption": 0.0, "fission": 0.0, "nu_fission": 0.0},
        {"energy": 2.0, "total": 5.0, "elastic": 0.0, "absorption": 0.0, "fission": 0.0, "nu_fission": 0.0}
    ]]}"#;

    let error = Library::from_json_str(json).unwrap_err();
    assert!(error.to_string().contains("zero width"), "{error}");
}

#[rstest]
#[case(Material::new().with(2, 1.0), "uses nuclide 2")]
#[case(Material::new().with(0, -1.0), "concentration -1")]
#[case(Material::new().with(0, f64::NAN), "concentration NaN")]
fn reject_bad_materials(#[case] material: Material, #[case] message: &str) {
    let library = Library {
        nuclides: vec![NuclideTable::new(vec![point(1.0, 1.0), point(2.0, 2.0)]).unwrap()],
        materials: vec![material],
    };

    let error = library.validate().unwrap_err();
    assert!(error.to_string().contains(message), "{error}");
}

#[rstest]
fn zero_concentration_is_valid() {
    let library = Library {
        nuclides: vec![NuclideTable::new(vec![point(1.0, 1.0), point(2.0, 2.0)]).unwrap()],
        materials: vec![Material::new().with(0, 0.0)],
    };
    assert!(library.validate().is_ok());
}

#[rstest]
#[case(0.0, 0)]
#[case(1.0, 0)]
#[case(1.5, 0)]
#[case(2.0, 1)]
#[case(2.5, 1)]
#[case(3.0, 2)]
#[case(4.0, 2)]
#[case(10.0, 2)]
fn table_bracket(#[case] energy: f64, #[case] expected: usize) {
    let table = NuclideTable::new(vec![
        point(1.0, 1.0),
        point(2.0, 1.0),
        point(3.0, 1.0),
        point(4.0, 1.0),
    ])
    .unwrap();
    assert_eq!(table.bracket(energy), expected);
}

#[rstest]
fn bracket_skips_repeated_energies() {
    // a step in the data is tabulated as two rows at the same energy
    let table = NuclideTable::new(vec![
        point(1.0, 1.0),
        point(2.0, 1.0),
        point(2.0, 5.0),
        point(3.0, 5.0),
    ])
    .unwrap();

    assert_eq!(table.bracket(2.0), 2);
    let low = table.points()[table.bracket(2.0)];
    assert_eq!(low.total, 5.0);
}

#[rstest]
fn xs_vector_display() {
    let xs = XsVector::from([1.0, 0.5, 0.5, 0.0, 2.5e-3]);
    assert_eq!(
        xs.to_string(),
        "[total 1.00000e+00, elastic 5.00000e-01, absorption 5.00000e-01, \
         fission 0.00000e+00, nu-fission 2.50000e-03]"
    );
}

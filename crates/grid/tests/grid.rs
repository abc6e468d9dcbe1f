//! Integration tests for unionized grid construction and search

use rstest::{fixture, rstest};
use xstools_data::{Library, Material, NuclideGridPoint, NuclideTable, XsVector};
use xstools_grid::{grid_search, Error, GridPoint, UnionizedGrid};

fn table(energies: &[f64]) -> NuclideTable {
    let rows = energies
        .iter()
        .map(|e| NuclideGridPoint::new(*e, XsVector::from([*e; 5])))
        .collect();
    NuclideTable::new(rows).unwrap()
}

fn bare_grid(energies: &[f64]) -> Vec<GridPoint> {
    energies
        .iter()
        .map(|e| GridPoint { energy: *e })
        .collect()
}

#[fixture]
fn grid() -> UnionizedGrid {
    UnionizedGrid::new(vec![
        table(&[0.1, 1.0, 2.0, 5.0, 20.0]),
        table(&[0.5, 1.0, 3.0, 7.0, 10.0]),
        table(&[0.01, 0.2, 4.0, 8.0, 15.0]),
    ])
    .unwrap()
}

#[rstest]
fn grid_is_merged_and_sorted(grid: UnionizedGrid) {
    // length is nuclides x points per nuclide, duplicates kept
    assert_eq!(grid.len(), 15);
    assert_eq!(grid.n_nuclides(), 3);

    let energies = grid.points().iter().map(|p| p.energy).collect::<Vec<f64>>();
    assert!(energies.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(energies.iter().filter(|e| **e == 1.0).count(), 2);
    assert_eq!(grid.energy_range(), (0.01, 20.0));
}

#[rstest]
fn cached_brackets_match_table_search(grid: UnionizedGrid) {
    for (index, point) in grid.points().iter().enumerate() {
        let brackets = grid.brackets(index);
        assert_eq!(brackets.len(), grid.n_nuclides());

        for (nuclide, bracket) in brackets.iter().enumerate() {
            let table = &grid.nuclides()[nuclide];
            assert_eq!(*bracket, table.bracket(point.energy));
            assert_eq!(*bracket, grid.bracket(index, nuclide));
            assert!(bracket + 1 < table.len());
        }
    }
}

#[rstest]
fn bracket_rows_are_contiguous_per_entry() {
    let grid = UnionizedGrid::new(vec![
        table(&[1.0, 2.0, 3.0]),
        table(&[1.5, 2.5]),
        table(&[0.5, 1.0, 4.0]),
    ])
    .unwrap();

    // energies 0.5 1.0 1.0 1.5 2.0 2.5 3.0 4.0
    let expected: [[usize; 3]; 8] = [
        [0, 0, 0],
        [0, 0, 1],
        [0, 0, 1],
        [0, 0, 1],
        [1, 0, 1],
        [1, 0, 1],
        [1, 0, 1],
        [1, 0, 1],
    ];

    assert_eq!(grid.len(), expected.len());
    for (index, row) in expected.iter().enumerate() {
        assert_eq!(grid.brackets(index), row, "entry {index}");
    }
}

#[rstest]
fn search_brackets_every_energy(grid: UnionizedGrid) {
    let (low, high) = grid.energy_range();
    let n = 1000;

    for i in 0..=n {
        let energy = (low + (high - low) * (i as f64) / (n as f64)).min(high);
        let idx = grid.search(energy);
        let points = grid.points();

        assert!(idx <= grid.len() - 2, "index {idx} for {energy}");
        assert!(points[idx].energy <= energy, "low side for {energy}");
        assert!(energy <= points[idx + 1].energy, "high side for {energy}");
    }
}

#[rstest]
fn search_exact_grid_energies(grid: UnionizedGrid) {
    for point in grid.points() {
        let idx = grid.search(point.energy);
        let points = grid.points();
        assert!(points[idx].energy <= point.energy);
        assert!(point.energy <= points[idx + 1].energy);
    }
}

#[rstest]
#[case(&[1.0, 2.0], 1.5, 0)]
#[case(&[1.0, 2.0], 1.0, 0)]
#[case(&[1.0, 2.0], 2.0, 0)]
#[case(&[1.0, 2.0, 3.0], 1.5, 0)]
#[case(&[1.0, 2.0, 3.0], 1.0, 0)]
#[case(&[1.0, 2.0, 3.0], 2.0, 1)]
#[case(&[1.0, 2.0, 3.0], 3.0, 1)]
#[case(&[1.0, 2.0, 3.0, 4.0, 5.0], 4.5, 3)]
#[case(&[1.0, 2.0, 3.0, 4.0, 5.0], 1.1, 0)]
#[case(&[1.0, 2.0, 3.0, 4.0, 5.0], 3.0, 2)]
fn search_small_grids(#[case] energies: &[f64], #[case] energy: f64, #[case] expected: usize) {
    assert_eq!(grid_search(&bare_grid(energies), energy), expected);
}

#[rstest]
fn search_outside_the_grid_stays_in_bounds() {
    let grid = bare_grid(&[1.0, 2.0, 3.0, 4.0]);
    assert_eq!(grid_search(&grid, 0.0), 0);
    assert_eq!(grid_search(&grid, 100.0), 2);
}

#[rstest]
fn single_nuclide_grid() {
    let grid = UnionizedGrid::new(vec![table(&[1.0, 3.0])]).unwrap();
    assert_eq!(grid.len(), 2);
    assert_eq!(grid.brackets(0), &[0]);
    assert_eq!(grid.brackets(1), &[0]);
    assert_eq!(grid.search(2.0), 0);
}

#[rstest]
fn empty_grid_is_an_error() {
    assert!(matches!(UnionizedGrid::new(vec![]), Err(Error::NoNuclides)));
}

#[rstest]
fn library_is_validated_first() {
    let library = Library {
        nuclides: vec![table(&[1.0, 2.0])],
        materials: vec![Material::new().with(4, 1.0)],
    };

    assert!(matches!(
        UnionizedGrid::from_library(&library),
        Err(Error::Data(xstools_data::Error::UnknownNuclide { nuclide: 4, .. }))
    ));
}

#[rstest]
fn grid_keeps_nuclide_tables() {
    let tables = vec![table(&[1.0, 2.0]), table(&[0.5, 4.0])];
    let grid = UnionizedGrid::new(tables.clone()).unwrap();
    assert_eq!(grid.into_nuclides(), tables);
}

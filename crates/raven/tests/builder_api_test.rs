//! Integration tests for the RowBuilder API
//!
//! These tests drive the public API from document text to drawn cells.

use raven::{
    RavenError, RowBuilder,
    config::{AppConfig, CellConfig, MatrixConfig},
    draw::DrawCommand,
    element::{Element, StructureError},
};

const ELLIPSE_AND_TEE: &str = r#"
    [figure]
    kind = "composite"

    [[figure.elements]]
    kind = "basic"
    routine = "ellipse"

    [[figure.elements]]
    kind = "basic"
    routine = "tee"

    [[rules]]
    condition = { kind = "basic", routine = "tee" }
    operation = { op = "remove" }

    [[rules]]
    condition = { kind = "basic", routine = "ellipse" }
    operation = { op = "replace", node = { kind = "basic", routine = "diamond" } }
"#;

#[test]
fn test_builder_api_exists() {
    let _builder = RowBuilder::default();
}

#[test]
fn test_parse_and_build_document() {
    let builder = RowBuilder::default();

    let document = builder.parse(ELLIPSE_AND_TEE).expect("Failed to parse document");
    let (figure, transformation) = builder.build(&document).expect("Failed to build document");

    assert!(matches!(figure, Element::Composite(_)));
    assert_eq!(transformation.rules().len(), 2);
}

#[test]
fn test_row_applies_transformation_repeatedly() {
    let builder = RowBuilder::default();
    let document = builder.parse(ELLIPSE_AND_TEE).unwrap();
    let (figure, transformation) = builder.build(&document).unwrap();

    let row = builder.row(&figure, &transformation, 3).expect("Failed to generate row");

    assert_eq!(row[0], figure);
    let Element::Basic(second) = &row[1] else {
        panic!("expected a basic element, got {:?}", row[1]);
    };
    assert_eq!(second.routine().name(), "diamond");
    // Neither condition holds for a lone diamond.
    assert_eq!(row[2], row[1]);
}

#[test]
fn test_trace_draws_into_configured_cells() {
    let config = AppConfig::new(MatrixConfig::new("m", 3, 8), CellConfig::new(50.0, 40.0));
    let builder = RowBuilder::new(config);
    let document = builder.parse(ELLIPSE_AND_TEE).unwrap();
    let (figure, transformation) = builder.build(&document).unwrap();
    let row = builder.row(&figure, &transformation, 2).unwrap();

    let traces = builder.trace(1, &row).expect("Failed to draw row");

    assert_eq!(traces.len(), 2);
    assert_eq!(traces[0].cell().id(), "m/r1c0");
    assert_eq!(traces[1].cell().id(), "m/r1c1");
    assert_eq!(
        traces[0].commands()[1],
        DrawCommand::Translate { dx: 25.0, dy: 20.0 }
    );
    let paths = |commands: &[DrawCommand]| {
        commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::NewSubPath))
            .count()
    };
    assert_eq!(paths(traces[0].commands()), 2);
    assert_eq!(paths(traces[1].commands()), 1);
}

#[test]
fn test_row_round_trips_through_toml() {
    let builder = RowBuilder::default();
    let document = builder.parse(ELLIPSE_AND_TEE).unwrap();
    let (figure, transformation) = builder.build(&document).unwrap();
    let row = builder.row(&figure, &transformation, 2).unwrap();

    let text = builder.to_toml(&row).expect("Failed to serialize row");

    assert!(text.contains("figures"));
    assert!(text.contains("\"diamond\""));
    assert_eq!(text.matches("\"tee\"").count(), 1);
}

#[test]
fn test_parse_invalid_document_returns_error() {
    let builder = RowBuilder::default();

    let result = builder.parse("[figure]\nkind = \"hexagonal\"\n");

    assert!(matches!(result, Err(RavenError::Document { .. })));
}

#[test]
fn test_unknown_routine_returns_error() {
    let builder = RowBuilder::default();
    let document = builder
        .parse("[figure]\nkind = \"basic\"\nroutine = \"star\"\n")
        .unwrap();

    assert!(matches!(
        builder.build(&document),
        Err(RavenError::UnknownRoutine(name)) if name == "star"
    ));
}

#[test]
fn test_empty_figure_is_rejected() {
    let builder = RowBuilder::default();
    let document = builder
        .parse(
            r#"
            [figure]
            kind = "composite"
            elements = [{ kind = "basic", routine = "tee" }, { kind = "empty" }]
            "#,
        )
        .unwrap();

    assert!(matches!(
        builder.build(&document),
        Err(RavenError::Structure(StructureError::EmptyFigure))
    ));
}

#[test]
fn test_draw_error_names_the_cell() {
    let builder = RowBuilder::default();
    let document = builder
        .parse("[figure]\nkind = \"basic\"\nroutine = \"ellipse\"\nparams = { tallness = 0.5 }\n")
        .unwrap();
    let (figure, _) = builder.build(&document).unwrap();

    let err = builder.trace(0, &[figure]).unwrap_err();

    assert!(matches!(err, RavenError::Draw { ref cell, .. } if cell == "matrix/r0c0"));
}

#[test]
fn test_builder_reusability() {
    let builder = RowBuilder::default();

    for source in [ELLIPSE_AND_TEE, "[figure]\nkind = \"basic\"\nroutine = \"tee\"\n"] {
        let document = builder.parse(source).unwrap();
        let (figure, transformation) = builder.build(&document).unwrap();
        assert!(builder.row(&figure, &transformation, 3).is_ok());
    }
}

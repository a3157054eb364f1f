use serde_json::Value;
use tf_idf_uniqueness::{
    analyze,
    service::{handle_json, StatusCode},
    AnalyzeError, ValidationError,
};

const EPS: f64 = 1e-9;

fn batch() -> (Vec<&'static str>, Vec<&'static str>) {
    let titles = vec![
        "Graph Neural Networks for Molecules",
        "Molecular Property Prediction",
        "Crop Yield Forecasting",
        "Soil Moisture Sensing with Drones",
        "Language Models for Code",
    ];
    let abstracts = vec![
        "We apply graph neural networks to predict molecular properties from atom graphs.",
        "Predicting molecular properties with message passing networks on 3D conformers.",
        "Satellite imagery and weather records forecast crop yield across 2,000 farms.",
        "Drones carry thermal sensors to map soil moisture for irrigation planning.",
        "Large language models generate and repair source code in open repositories.",
    ];
    (titles, abstracts)
}

#[test]
fn matrix_is_square_symmetric_with_unit_diagonal() {
    let (titles, abstracts) = batch();
    let result = analyze(&titles, &abstracts).unwrap();
    let m = &result.similarity_matrix;
    assert_eq!(m.len(), titles.len());
    for i in 0..m.len() {
        assert_eq!(m.row(i).unwrap().len(), titles.len());
        assert_eq!(m.get(i, i), 1.0);
        for j in 0..m.len() {
            assert_eq!(m.get(i, j), m.get(j, i));
            assert!((0.0..=1.0).contains(&m.get(i, j)));
        }
    }
}

#[test]
fn ranks_are_a_permutation_with_non_increasing_scores() {
    let (titles, abstracts) = batch();
    let ranking = analyze(&titles, &abstracts).unwrap().uniqueness_ranks;
    assert_eq!(ranking.len(), titles.len());

    let ranks: Vec<usize> = ranking.iter().map(|r| r.rank).collect();
    assert_eq!(ranks, (1..=titles.len()).collect::<Vec<_>>());

    let mut indices: Vec<usize> = ranking.iter().map(|r| r.index).collect();
    indices.sort_unstable();
    assert_eq!(indices, (0..titles.len()).collect::<Vec<_>>());

    for pair in ranking.list.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    for record in ranking.iter() {
        assert!((0.0..=1.0).contains(&record.score));
    }
}

#[test]
fn abstract_length_counts_the_raw_abstract() {
    let (titles, abstracts) = batch();
    let ranking = analyze(&titles, &abstracts).unwrap().uniqueness_ranks;
    for (index, abstract_text) in abstracts.iter().enumerate() {
        let record = ranking.get_by_index(index).unwrap();
        assert_eq!(record.abstract_length, abstract_text.split_whitespace().count());
    }
}

#[test]
fn repeated_calls_are_identical() {
    let (titles, abstracts) = batch();
    let first = analyze(&titles, &abstracts).unwrap();
    let second = analyze(&titles, &abstracts).unwrap();
    assert_eq!(first, second);
}

#[test]
fn single_project_is_fully_unique() {
    let result = analyze(&["Tidal Energy"], &["Turbines harvest tidal currents."]).unwrap();
    assert_eq!(result.similarity_matrix.rows(), &[vec![1.0]]);
    let record = result.uniqueness_ranks.list[0];
    assert_eq!((record.index, record.score, record.rank, record.abstract_length), (0, 1.0, 1, 4));
}

#[test]
fn identical_projects_are_not_unique() {
    let result = analyze(&["A", "B"], &["cat dog", "cat dog"]).unwrap();
    // equal up to rounding of the dot product, never above 1.0
    let sim = result.similarity_matrix.get(0, 1);
    assert!(sim <= 1.0);
    assert!(1.0 - sim < EPS);
    for record in result.uniqueness_ranks.iter() {
        assert!(record.score.abs() < EPS);
    }
}

#[test]
fn disjoint_projects_are_fully_unique() {
    let result = analyze(&["A", "B"], &["apple banana", "xylophone zebra"]).unwrap();
    assert_eq!(result.similarity_matrix.get(0, 1), 0.0);
    assert_eq!(result.uniqueness_ranks.scores(), vec![1.0, 1.0]);
    // ties keep input order
    let order: Vec<usize> = result.uniqueness_ranks.iter().map(|r| r.index).collect();
    assert_eq!(order, vec![0, 1]);
}

#[test]
fn bridging_project_ranks_last() {
    let result = analyze(
        &["Solar", "Wind", "Hybrid"],
        &["photovoltaic panels", "offshore turbines", "photovoltaic panels offshore turbines"],
    )
    .unwrap();
    assert_eq!(result.similarity_matrix.get(0, 1), 0.0);
    let last = result.uniqueness_ranks.list.last().unwrap();
    assert_eq!(last.index, 2);
    assert_eq!(last.rank, 3);
    let hybrid = last.score;
    for index in [0, 1] {
        assert!(result.uniqueness_ranks.get_by_index(index).unwrap().score > hybrid);
    }
}

#[test]
fn validation_failures() {
    assert_eq!(
        analyze(&["A", "B"], &["only one"]).unwrap_err(),
        AnalyzeError::Validation(ValidationError::LengthMismatch { titles: 2, abstracts: 1 })
    );
    let none: [&str; 0] = [];
    assert_eq!(
        analyze(&none, &none).unwrap_err(),
        AnalyzeError::Validation(ValidationError::Empty)
    );
    assert_eq!(
        analyze(&["The", "Of"], &["and the 1999 ...", "it is, was!"]).unwrap_err(),
        AnalyzeError::Validation(ValidationError::NoAnalyzableContent)
    );
}

#[test]
fn json_round_trip_through_the_service() {
    let body = r#"{"titles": ["A", "B"], "abstracts": ["apple banana", "xylophone zebra"]}"#;
    let (status, response) = handle_json(body, false);
    assert_eq!(status, StatusCode::Ok);
    let response: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["message"], "Analysis successful");
    assert_eq!(response["similarity_matrix"][0][1], 0.0);
    assert_eq!(response["uniqueness_ranks"].as_array().unwrap().len(), 2);
    assert_eq!(response["uniqueness_ranks"][1]["rank"], 2);
}

#[test]
fn json_validation_error_is_400() {
    let (status, response) = handle_json(r#"{"titles": ["A"], "abstracts": []}"#, false);
    assert_eq!(status.as_u16(), 400);
    let response: Value = serde_json::from_str(&response).unwrap();
    assert!(response["error"].as_str().unwrap().starts_with("Please provide matching lists"));
}

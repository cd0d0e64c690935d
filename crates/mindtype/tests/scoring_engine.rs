use mindtype::assessment::{
    score, AnswerSet, Axis, Pole, QuestionId, Questionnaire, QuestionnaireError, Rating,
    ScoringEngine, ScoringError,
};
use std::io::Cursor;
use std::sync::Arc;

fn rating(value: u8) -> Rating {
    Rating::new(value).expect("valid rating")
}

#[test]
fn midpoint_answers_score_estj_at_even_split() {
    let engine = ScoringEngine::standard();
    let answers = AnswerSet::filled(engine.questionnaire(), Rating::MIDPOINT);

    let classification = engine.score(&answers).expect("complete answers");

    assert_eq!(classification.type_code().to_string(), "ESTJ");
    for axis in Axis::ordered() {
        let (first, second) = axis.poles();
        assert_eq!(classification.percentages().share(first), Some(50.0));
        assert_eq!(classification.percentages().share(second), Some(50.0));
    }
}

#[test]
fn every_rating_spends_six_points_per_question() {
    let questionnaire = Questionnaire::standard();

    for value in Rating::all() {
        let (positive, negative) = value.pole_points();
        assert_eq!(positive + negative, 6, "rating {}", value.value());

        let answers = AnswerSet::filled(&questionnaire, value);
        let classification = score(&questionnaire, &answers).expect("complete answers");
        for axis in Axis::ordered() {
            let split = classification
                .percentages()
                .split(axis)
                .expect("every axis scored");
            let total: f64 = split.values().sum();
            assert!((total - 100.0).abs() < 1e-9, "{axis} sums to {total}");
        }
    }
}

#[test]
fn agreeing_with_one_pole_pushes_the_axis_to_it() {
    let questionnaire = Questionnaire::standard();
    let answers: AnswerSet = questionnaire
        .questions()
        .iter()
        .map(|question| {
            let agree = matches!(
                question.positive_pole,
                Pole::Introversion | Pole::Intuition | Pole::Feeling | Pole::Perceiving
            );
            (question.id, rating(if agree { 4 } else { 2 }))
        })
        .collect();

    let classification = score(&questionnaire, &answers).expect("complete answers");

    assert_eq!(classification.type_code().to_string(), "INFP");
    // Per question: 4 to the agreed pole, 2 to the other; per axis 48 vs 24 points.
    assert_eq!(
        classification.percentages().share(Pole::Introversion),
        Some(66.7)
    );
    assert_eq!(
        classification.percentages().share(Pole::Extraversion),
        Some(33.3)
    );
}

#[test]
fn missing_rating_fails_the_whole_call() {
    let questionnaire = Questionnaire::standard();
    let mut answers = AnswerSet::new();
    for question in questionnaire.questions().iter().skip(1) {
        answers.insert(question.id, rating(5));
    }

    assert_eq!(
        score(&questionnaire, &answers),
        Err(ScoringError::MissingAnswer {
            question_id: QuestionId(1)
        })
    );
}

#[test]
fn csv_questionnaire_and_answers_score_together() {
    let questionnaire = Questionnaire::from_reader(Cursor::new(
        "id,axis,positive_pole,text\n\
         1,E/I,I,Quiet evenings recharge me\n\
         2,S/N,N,I enjoy abstract ideas\n\
         3,T/F,T,Logic beats sentiment\n\
         4,J/P,J,I plan ahead\n",
    ))
    .expect("questionnaire parses");
    let answers = AnswerSet::from_csv_reader(Cursor::new(
        "question_id,value\n1,5\n2,1\n3,3\n4,2\n",
    ))
    .expect("answers parse");
    let engine = ScoringEngine::new(Arc::new(questionnaire));

    let classification = engine.score(&answers).expect("complete answers");

    assert_eq!(classification.type_code().to_string(), "ISTP");
    assert_eq!(
        classification.percentages().share(Pole::Introversion),
        Some(83.3)
    );
    assert_eq!(classification.percentages().share(Pole::Sensing), Some(83.3));
    assert_eq!(classification.percentages().share(Pole::Thinking), Some(50.0));
    assert_eq!(classification.percentages().share(Pole::Perceiving), Some(66.7));
}

#[test]
fn csv_questionnaire_rejects_poles_from_other_axes() {
    let result = Questionnaire::from_reader(Cursor::new(
        "id,axis,positive_pole,text\n1,E/I,N,Misfiled item\n",
    ));

    assert!(matches!(
        result,
        Err(QuestionnaireError::PoleOutsideAxis { .. })
    ));
}

#[test]
fn classification_serializes_with_axis_and_pole_keys() {
    let engine = ScoringEngine::standard();
    let answers = AnswerSet::filled(engine.questionnaire(), rating(5));
    let classification = engine.score(&answers).expect("complete answers");

    let value = serde_json::to_value(&classification).expect("serializes");

    assert!(value["type"].is_string());
    for axis in ["E/I", "S/N", "T/F", "J/P"] {
        assert!(value["percentages"][axis].is_object(), "{axis} present");
    }
}

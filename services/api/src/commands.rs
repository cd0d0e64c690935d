use crate::server::load_questionnaire;
use clap::Args;
use mindtype::assessment::{score, AnswerSet, Axis, Classification};
use mindtype::catalog::{lookup_careers, lookup_report, CareerMatch, TypeReport};
use mindtype::compare::{relationship, RelationshipAnalysis};
use mindtype::error::AppError;
use serde::Serialize;
use std::fs::File;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// CSV file with `question_id,value` rows
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Questionnaire CSV (`id,axis,positive_pole,text`); defaults to the built-in instrument
    #[arg(long)]
    pub(crate) questionnaire: Option<PathBuf>,
    /// Print JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct CompareArgs {
    /// First type code (case-insensitive)
    pub(crate) type_a: String,
    /// Second type code (case-insensitive)
    pub(crate) type_b: String,
    /// Print JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Type code to describe (case-insensitive)
    pub(crate) type_code: String,
    /// Print JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Serialize)]
struct ReportOutput {
    #[serde(flatten)]
    report: TypeReport,
    recommended_careers: Vec<&'static str>,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let questionnaire = load_questionnaire(args.questionnaire.as_deref())?;
    let answers = AnswerSet::from_csv_reader(File::open(&args.answers)?)?;
    let classification = score(&questionnaire, &answers)?;

    if args.json {
        print_json(&classification)
    } else {
        print!("{}", render_classification(&classification));
        Ok(())
    }
}

pub(crate) fn run_compare(args: CompareArgs) -> Result<(), AppError> {
    let analysis = relationship(&args.type_a, &args.type_b)?;

    if args.json {
        print_json(&analysis)
    } else {
        print!("{}", render_relationship(&analysis));
        Ok(())
    }
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let report = lookup_report(&args.type_code)?;
    let careers = lookup_careers(&args.type_code)?;

    if args.json {
        print_json(&ReportOutput {
            report,
            recommended_careers: careers.recommended_careers,
        })
    } else {
        print!("{}", render_report(&report, &careers));
        Ok(())
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(value).map_err(std::io::Error::from)?;
    println!("{json}");
    Ok(())
}

pub(crate) fn render_classification(classification: &Classification) -> String {
    let percentages = classification.percentages();
    let mut out = format!("Type: {}\n", classification.type_code());
    for axis in Axis::ordered() {
        let (first, second) = axis.poles();
        out.push_str(&format!(
            "  {:<10} {} {:>5.1}% | {} {:>5.1}%\n",
            axis.name(),
            first.letter(),
            percentages.share(first).unwrap_or_default(),
            second.letter(),
            percentages.share(second).unwrap_or_default(),
        ));
    }
    out
}

pub(crate) fn render_relationship(analysis: &RelationshipAnalysis) -> String {
    let mut out = format!(
        "{} + {}: {} ({} of 4 axes shared)\n",
        analysis.type_a, analysis.type_b, analysis.category_label, analysis.shared_axes
    );
    let sections: [(&str, Vec<&str>); 3] = [
        (
            "Conflict points",
            analysis.conflict_points.iter().map(String::as_str).collect(),
        ),
        ("Communication", analysis.communication_strategy.clone()),
        ("Long-term", analysis.long_term_tips.clone()),
    ];
    for (title, lines) in sections {
        out.push_str(&format!("\n{title}\n"));
        for line in lines {
            out.push_str(&format!("- {line}\n"));
        }
    }
    out
}

pub(crate) fn render_report(report: &TypeReport, careers: &CareerMatch) -> String {
    let record = &report.report;
    format!(
        "{}: {}\n\n\
         Strengths: {}\n\
         Weaknesses: {}\n\
         Under stress: {}\n\
         Decision style: {}\n\n\
         Recommended careers: {}\n",
        report.type_code,
        record.keywords.join(", "),
        record.strengths,
        record.weaknesses,
        record.stress_reaction,
        record.decision_style,
        careers.recommended_careers.join(", "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindtype::assessment::{Questionnaire, Rating};

    #[test]
    fn classification_summary_lists_every_axis() {
        let questionnaire = Questionnaire::standard();
        let answers = AnswerSet::filled(&questionnaire, Rating::MIDPOINT);
        let classification = score(&questionnaire, &answers).expect("complete answers");

        let rendered = render_classification(&classification);

        assert!(rendered.starts_with("Type: ESTJ\n"));
        assert_eq!(rendered.lines().count(), 5);
        assert!(rendered.contains("Energy     E  50.0% | I  50.0%"));
    }

    #[test]
    fn relationship_summary_names_category_and_sections() {
        let analysis = relationship("ENFP", "ENFJ").expect("valid pair");

        let rendered = render_relationship(&analysis);

        assert!(rendered.starts_with("ENFP + ENFJ: Ideal (3 of 4 axes shared)"));
        assert!(rendered.contains("\nConflict points\n- Lifestyle (J/P)"));
        assert!(rendered.contains("\nLong-term\n"));
    }

    #[test]
    fn report_summary_includes_careers() {
        let report = lookup_report("intj").expect("valid");
        let careers = lookup_careers("intj").expect("valid");

        let rendered = render_report(&report, &careers);

        assert!(rendered.starts_with("INTJ: "));
        assert!(rendered.contains("Recommended careers: research, planning"));
    }

    #[test]
    fn report_summary_lays_out_every_section_in_order() {
        let report = lookup_report("ENFP").expect("valid");
        let careers = lookup_careers("ENFP").expect("valid");
        let record = &report.report;

        let rendered = render_report(&report, &careers);

        let expected = format!(
            "ENFP: {}\n\nStrengths: {}\nWeaknesses: {}\nUnder stress: {}\nDecision style: {}\n\nRecommended careers: {}\n",
            record.keywords.join(", "),
            record.strengths,
            record.weaknesses,
            record.stress_reaction,
            record.decision_style,
            careers.recommended_careers.join(", "),
        );
        assert_eq!(rendered, expected);
    }

    #[test]
    fn relationship_summary_separates_sections_with_blank_lines() {
        let analysis = relationship("ISTJ", "ISTJ").expect("valid pair");

        let rendered = render_relationship(&analysis);

        assert_eq!(analysis.conflict_points.len(), 1);
        let mut expected = format!(
            "ISTJ + ISTJ: {} (4 of 4 axes shared)\n\nConflict points\n- {}\n\nCommunication\n",
            analysis.category_label, analysis.conflict_points[0]
        );
        for line in &analysis.communication_strategy {
            expected.push_str(&format!("- {line}\n"));
        }
        expected.push_str("\nLong-term\n");
        for line in &analysis.long_term_tips {
            expected.push_str(&format!("- {line}\n"));
        }
        assert_eq!(rendered, expected);
    }

    #[test]
    fn score_command_reports_unreadable_answer_files() {
        let err = run_score(ScoreArgs {
            answers: PathBuf::from("/nonexistent/answers.csv"),
            questionnaire: None,
            json: false,
        })
        .expect_err("missing file");

        assert!(matches!(err, AppError::Io(_)));
    }
}

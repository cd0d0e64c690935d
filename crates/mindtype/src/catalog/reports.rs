use super::type_code::TypeCode;
use super::CatalogError;
use serde::Serialize;

/// Static descriptive profile for one type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportRecord {
    pub keywords: [&'static str; 5],
    pub strengths: &'static str,
    pub weaknesses: &'static str,
    pub stress_reaction: &'static str,
    pub decision_style: &'static str,
}

/// Report response: the normalized code alongside its profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeReport {
    #[serde(rename = "type")]
    pub type_code: TypeCode,
    #[serde(flatten)]
    pub report: ReportRecord,
}

pub fn lookup_report(input: &str) -> Result<TypeReport, CatalogError> {
    let type_code = TypeCode::parse(input)?;
    let report = *report_for(type_code)?;
    Ok(TypeReport { type_code, report })
}

pub fn report_for(type_code: TypeCode) -> Result<&'static ReportRecord, CatalogError> {
    let key = type_code.to_string();
    REPORTS
        .iter()
        .find(|(code, _)| *code == key)
        .map(|(_, report)| report)
        .ok_or(CatalogError::NotFound { type_code })
}

static REPORTS: [(&str, ReportRecord); 16] = [
    (
        "INTJ",
        ReportRecord {
            keywords: ["strategic", "independent", "analytical", "visionary", "determined"],
            strengths: "Builds long-range plans and sees how the pieces of a complex system fit together.",
            weaknesses: "Can come across as dismissive of ideas that have not been thought through.",
            stress_reaction: "Withdraws, over-analyzes details, and may indulge in sensory distractions.",
            decision_style: "Weighs options against a clear internal model and commits once the logic holds.",
        },
    ),
    (
        "INTP",
        ReportRecord {
            keywords: ["curious", "logical", "inventive", "reserved", "precise"],
            strengths: "Finds inconsistencies quickly and enjoys building elegant explanations.",
            weaknesses: "May lose interest once a problem is understood and leave follow-through to others.",
            stress_reaction: "Becomes unusually emotional or sensitive to criticism.",
            decision_style: "Keeps questioning assumptions until the reasoning feels airtight.",
        },
    ),
    (
        "ENTJ",
        ReportRecord {
            keywords: ["decisive", "ambitious", "organized", "direct", "commanding"],
            strengths: "Mobilizes people and resources toward a clear goal.",
            weaknesses: "Can push too hard and overlook how others feel about the pace.",
            stress_reaction: "Feels isolated and unappreciated, then doubles down on control.",
            decision_style: "Decides quickly from objective criteria and adjusts once results come in.",
        },
    ),
    (
        "ENTP",
        ReportRecord {
            keywords: ["inventive", "energetic", "debating", "adaptable", "bold"],
            strengths: "Generates unconventional options and thrives on intellectual challenge.",
            weaknesses: "Starts more projects than can be finished and may argue for sport.",
            stress_reaction: "Fixates on small details and physical complaints.",
            decision_style: "Explores many possibilities out loud before settling on one.",
        },
    ),
    (
        "INFJ",
        ReportRecord {
            keywords: ["insightful", "principled", "empathetic", "private", "idealistic"],
            strengths: "Reads people well and works steadily toward meaningful goals.",
            weaknesses: "Sets very high standards and may burn out trying to meet them.",
            stress_reaction: "Turns to sensory overload such as overeating or binge-watching.",
            decision_style: "Follows a strong inner sense of what is right after long reflection.",
        },
    ),
    (
        "INFP",
        ReportRecord {
            keywords: ["idealistic", "gentle", "creative", "loyal", "reflective"],
            strengths: "Brings authenticity and imagination to everything cared about.",
            weaknesses: "Avoids conflict and can take criticism very personally.",
            stress_reaction: "Becomes uncharacteristically critical and rigid.",
            decision_style: "Checks every option against personal values before acting.",
        },
    ),
    (
        "ENFJ",
        ReportRecord {
            keywords: ["warm", "inspiring", "responsible", "persuasive", "supportive"],
            strengths: "Brings groups together and helps individuals grow.",
            weaknesses: "Takes on other people's problems and neglects personal needs.",
            stress_reaction: "Becomes harshly critical and withdraws into cold logic.",
            decision_style: "Considers the impact on everyone involved and seeks consensus.",
        },
    ),
    (
        "ENFP",
        ReportRecord {
            keywords: ["enthusiastic", "creative", "sociable", "spontaneous", "optimistic"],
            strengths: "Sparks excitement and sees potential in people and ideas.",
            weaknesses: "Gets distracted by new possibilities and struggles with routine.",
            stress_reaction: "Obsesses over facts and details that usually go unnoticed.",
            decision_style: "Follows what feels inspiring, then gathers support from others.",
        },
    ),
    (
        "ISTJ",
        ReportRecord {
            keywords: ["dependable", "thorough", "practical", "orderly", "loyal"],
            strengths: "Delivers consistently and keeps commitments to the letter.",
            weaknesses: "Resists changes that have not proven themselves.",
            stress_reaction: "Imagines worst-case scenarios and catastrophizes.",
            decision_style: "Relies on precedent and verified facts.",
        },
    ),
    (
        "ISFJ",
        ReportRecord {
            keywords: ["caring", "conscientious", "patient", "humble", "observant"],
            strengths: "Notices what others need and quietly takes care of it.",
            weaknesses: "Has trouble saying no and undervalues personal contributions.",
            stress_reaction: "Sees only negative possibilities ahead.",
            decision_style: "Draws on past experience and considers who will be affected.",
        },
    ),
    (
        "ESTJ",
        ReportRecord {
            keywords: ["efficient", "structured", "direct", "responsible", "traditional"],
            strengths: "Establishes clear processes and holds people to them.",
            weaknesses: "Can be inflexible and impatient with inefficiency.",
            stress_reaction: "Feels unappreciated and becomes emotionally volatile.",
            decision_style: "Applies established rules and decides without delay.",
        },
    ),
    (
        "ESFJ",
        ReportRecord {
            keywords: ["sociable", "helpful", "organized", "loyal", "attentive"],
            strengths: "Creates a welcoming atmosphere and keeps groups running smoothly.",
            weaknesses: "Seeks approval and is hurt by indifference.",
            stress_reaction: "Turns critical of personal competence and logic.",
            decision_style: "Chooses what maintains harmony and meets everyone's expectations.",
        },
    ),
    (
        "ISTP",
        ReportRecord {
            keywords: ["hands-on", "calm", "resourceful", "independent", "pragmatic"],
            strengths: "Troubleshoots under pressure and learns by doing.",
            weaknesses: "Gets bored with long-term commitments and can seem detached.",
            stress_reaction: "Becomes oversensitive to relationships and emotional cues.",
            decision_style: "Tests options against how things actually work in practice.",
        },
    ),
    (
        "ISFP",
        ReportRecord {
            keywords: ["artistic", "gentle", "sensitive", "flexible", "present"],
            strengths: "Expresses care through action and has a strong aesthetic sense.",
            weaknesses: "Dislikes planning ahead and may avoid necessary confrontation.",
            stress_reaction: "Becomes harshly critical and tries to impose order.",
            decision_style: "Trusts personal values and how a choice feels in the moment.",
        },
    ),
    (
        "ESTP",
        ReportRecord {
            keywords: ["energetic", "bold", "perceptive", "practical", "spontaneous"],
            strengths: "Acts fast in a crisis and reads situations in real time.",
            weaknesses: "Takes risks without considering long-term consequences.",
            stress_reaction: "Reads hidden negative meaning into events.",
            decision_style: "Tries something, observes the result, and adjusts on the fly.",
        },
    ),
    (
        "ESFP",
        ReportRecord {
            keywords: ["lively", "friendly", "playful", "generous", "observant"],
            strengths: "Makes work enjoyable and responds to people's immediate needs.",
            weaknesses: "Avoids long-range planning and difficult conversations.",
            stress_reaction: "Feels overwhelmed by grim visions of the future.",
            decision_style: "Goes with what is most practical and engaging right now.",
        },
    ),
];

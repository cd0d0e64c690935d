use super::type_code::TypeCode;
use super::CatalogError;
use serde::Serialize;

/// Career families recommended for a type, strongest fit first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CareerMatch {
    #[serde(rename = "type")]
    pub type_code: TypeCode,
    pub recommended_careers: Vec<&'static str>,
}

pub fn lookup_careers(input: &str) -> Result<CareerMatch, CatalogError> {
    let type_code = TypeCode::parse(input)?;
    let recommended_careers = careers_for(type_code)?.to_vec();
    Ok(CareerMatch {
        type_code,
        recommended_careers,
    })
}

pub fn careers_for(type_code: TypeCode) -> Result<&'static [&'static str], CatalogError> {
    let key = type_code.to_string();
    CAREERS
        .iter()
        .find(|(code, _)| *code == key)
        .map(|(_, careers)| careers.as_slice())
        .ok_or(CatalogError::NotFound { type_code })
}

static CAREERS: [(&str, [&str; 5]); 16] = [
    ("INTJ", ["research", "planning", "software development", "strategy", "consulting"]),
    ("INTP", ["research", "software development", "planning", "analysis", "academia"]),
    ("ENTJ", ["management", "planning", "consulting", "law", "business administration"]),
    ("ENTP", ["planning", "marketing", "entrepreneurship", "consulting", "sales"]),
    ("INFJ", ["counseling", "education", "arts", "social work", "writing"]),
    ("INFP", ["arts", "counseling", "writing", "education", "social work"]),
    ("ENFJ", ["education", "counseling", "human resources", "marketing", "social work"]),
    ("ENFP", ["marketing", "education", "counseling", "arts", "media"]),
    ("ISTJ", ["accounting", "management", "law", "public service", "healthcare"]),
    ("ISFJ", ["healthcare", "education", "administration", "social work", "library services"]),
    ("ESTJ", ["management", "business administration", "law", "sales", "public service"]),
    ("ESFJ", ["education", "healthcare", "human resources", "customer service", "administration"]),
    ("ISTP", ["software development", "engineering", "maintenance", "business administration", "investigation"]),
    ("ISFP", ["arts", "design", "healthcare", "culinary", "crafts"]),
    ("ESTP", ["sales", "marketing", "sports", "business administration", "emergency services"]),
    ("ESFP", ["entertainment", "marketing", "sales", "events", "customer service"]),
];

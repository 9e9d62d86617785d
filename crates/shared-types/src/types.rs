use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of report an institution can generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    Compliance,
    Progress,
    Performance,
    Risk,
}

impl ReportType {
    pub const ALL: [ReportType; 4] = [
        ReportType::Compliance,
        ReportType::Progress,
        ReportType::Performance,
        ReportType::Risk,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::Compliance => "compliance",
            ReportType::Progress => "progress",
            ReportType::Performance => "performance",
            ReportType::Risk => "risk",
        }
    }

    /// Translation key of the report's display title
    pub fn title_key(&self) -> String {
        format!("report.title.{}", self.as_str())
    }
}

impl std::fmt::Display for ReportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ReportType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "compliance" => Ok(ReportType::Compliance),
            "progress" => Ok(ReportType::Progress),
            "performance" => Ok(ReportType::Performance),
            "risk" => Ok(ReportType::Risk),
            other => Err(format!("Unknown report type: {}", other)),
        }
    }
}

/// The five COSO internal-control components, in framework order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CosoComponent {
    ControlEnvironment,
    RiskAssessment,
    ControlActivities,
    InformationCommunication,
    Monitoring,
}

impl CosoComponent {
    pub const ALL: [CosoComponent; 5] = [
        CosoComponent::ControlEnvironment,
        CosoComponent::RiskAssessment,
        CosoComponent::ControlActivities,
        CosoComponent::InformationCommunication,
        CosoComponent::Monitoring,
    ];

    /// Stable key used in metrics payloads
    pub fn key(&self) -> &'static str {
        match self {
            CosoComponent::ControlEnvironment => "control_environment",
            CosoComponent::RiskAssessment => "risk_assessment",
            CosoComponent::ControlActivities => "control_activities",
            CosoComponent::InformationCommunication => "information_communication",
            CosoComponent::Monitoring => "monitoring",
        }
    }

    pub fn label_key(&self) -> String {
        format!("coso.{}", self.key())
    }
}

/// Plain-text report produced by the formatter, possibly hand-edited afterwards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedReport {
    pub title: String,
    /// Lines in reading order
    pub body: Vec<String>,
}

impl FormattedReport {
    /// Rebuild a report from user-edited text
    pub fn with_text(title: impl Into<String>, text: &str) -> Self {
        Self {
            title: title.into(),
            body: text.lines().map(str::to_string).collect(),
        }
    }

    pub fn to_text(&self) -> String {
        self.body.join("\n")
    }
}

/// Institution the report is issued for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Institution {
    pub name: String,
    /// Institution type, e.g. "Supreme Audit Institution"
    #[serde(default, alias = "type")]
    pub kind: String,
}

/// Everything the renderer needs to lay out one report
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    pub institution: Institution,
    pub title: String,
    pub report_number: String,
    pub report_date: NaiveDate,
    /// Report body text, one logical line per `\n`
    pub content: String,
}

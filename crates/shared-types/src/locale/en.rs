pub(super) const ENTRIES: &[(&str, &str)] = &[
    // Report titles
    ("report.title.compliance", "Internal Control Compliance Report"),
    ("report.title.progress", "Workflow Progress Report"),
    ("report.title.performance", "Internal Control Performance Report"),
    ("report.title.risk", "Risk Assessment Report"),
    // Section labels
    ("section.executive_summary", "Executive Summary"),
    ("section.component_analysis", "COSO Component Analysis"),
    ("section.recommendations", "Recommendations"),
    ("section.next_steps", "Next Steps"),
    ("section.conclusion", "Conclusion"),
    ("section.workflow_status", "Workflow Status"),
    ("section.milestones", "Milestones Achieved"),
    ("section.performance_metrics", "Performance Metrics"),
    ("section.improvement_areas", "Areas for Improvement"),
    ("section.risk_profile", "Risk Profile"),
    ("section.high_risk_areas", "High-Risk Areas"),
    ("section.mitigation", "Mitigation Recommendations"),
    ("common.not_available", "Not Available"),
    // Score ladder
    ("score.excellent", "Excellent"),
    ("score.good", "Good"),
    ("score.satisfactory", "Satisfactory"),
    ("score.needs_improvement", "Needs Improvement"),
    ("score.critical", "Critical"),
    ("score.not_evaluated", "Not Evaluated"),
    // COSO components
    ("coso.control_environment", "Control Environment"),
    ("coso.risk_assessment", "Risk Assessment"),
    ("coso.control_activities", "Control Activities"),
    ("coso.information_communication", "Information and Communication"),
    ("coso.monitoring", "Monitoring Activities"),
    // Compliance report
    (
        "compliance.summary",
        "This report presents the internal control compliance status of the institution, assessed against the five components of the COSO framework.",
    ),
    ("compliance.overall_score", "Overall compliance score: {{score}}% ({{label}})"),
    ("compliance.assessments_completed", "Self-assessments completed: {{count}}"),
    ("compliance.last_assessment", "Last assessment date: {{date}}"),
    ("compliance.component_line", "{{index}}. {{component}}: {{score}}% - {{label}}"),
    ("compliance.no_recommendations", "There are no recommendations at this time."),
    ("compliance.next_step.1", "Address the components rated below Satisfactory as a priority."),
    ("compliance.next_step.2", "Update the supporting evidence for each control objective."),
    ("compliance.next_step.3", "Schedule the next self-assessment cycle."),
    (
        "compliance.conclusion",
        "The internal control system is rated {{label}} overall. Continued monitoring and timely implementation of the recommendations will sustain compliance.",
    ),
    // Progress report
    (
        "progress.summary",
        "This report summarizes the progress of internal control workflows across the institution.",
    ),
    ("progress.total", "Total workflows: {{count}}"),
    ("progress.completed", "Completed workflows: {{count}}"),
    ("progress.in_progress", "Workflows in progress: {{count}}"),
    ("progress.pending", "Pending workflows: {{count}}"),
    ("progress.completion_rate", "Completion rate: {{rate}}"),
    ("progress.overdue", "Overdue tasks: {{count}}"),
    ("progress.no_milestones", "No milestones have been recorded for this period."),
    ("progress.next_step.1", "Resolve overdue tasks and reassign blocked workflow steps."),
    ("progress.next_step.2", "Review pending workflows with their owners."),
    ("progress.next_step.3", "Set milestones for the next reporting period."),
    (
        "progress.conclusion",
        "{{completed}} of {{total}} workflows are complete. Progress will be reviewed again at the next reporting date.",
    ),
    // Performance report
    (
        "performance.summary",
        "This report evaluates the performance of the internal control system over the reporting period.",
    ),
    ("performance.effectiveness", "Control effectiveness: {{rate}}"),
    ("performance.assessments", "Assessments completed: {{count}}"),
    ("performance.documents", "Evidence documents uploaded: {{count}}"),
    ("performance.response_days", "Average response time: {{days}} days"),
    ("performance.objectives", "Control objectives met: {{met}} of {{total}}"),
    ("performance.no_improvement_areas", "No areas for improvement have been identified."),
    ("performance.next_step.1", "Strengthen controls in the areas identified for improvement."),
    ("performance.next_step.2", "Reduce response times on outstanding assessments."),
    ("performance.next_step.3", "Document the evidence supporting each objective met."),
    (
        "performance.conclusion",
        "Control effectiveness stands at {{rate}}. Performance will continue to be tracked against the control objectives.",
    ),
    // Risk report
    (
        "risk.summary",
        "This report presents the risk profile of the institution and the status of mitigation measures.",
    ),
    ("risk.overall_score", "Overall risk score: {{score}}"),
    ("risk.total", "Identified risks: {{count}}"),
    ("risk.high", "High risks: {{count}}"),
    ("risk.medium", "Medium risks: {{count}}"),
    ("risk.low", "Low risks: {{count}}"),
    ("risk.mitigated", "Mitigated risks: {{count}}"),
    ("risk.no_high_risk_areas", "No high-risk areas have been flagged."),
    ("risk.mitigation.1", "Assign an owner and a deadline to every high risk."),
    ("risk.mitigation.2", "Design compensating controls for risks that cannot be avoided."),
    ("risk.mitigation.3", "Reassess residual risk after mitigation measures are in place."),
    (
        "risk.conclusion",
        "{{high}} high risks require management attention. The risk register will be reviewed at the next assessment.",
    ),
    // Rendered document
    ("render.report_number", "Report Number: {{number}}"),
    ("render.report_date", "Report Date: {{date}}"),
    ("render.report_content", "REPORT CONTENT"),
    (
        "render.generated_by",
        "Generated by the Internal Control Management System on {{date}}",
    ),
    (
        "render.confidential",
        "This report is confidential and intended for internal use only.",
    ),
    // Dates
    ("date.long", "{{month}} {{day}}, {{year}}"),
    ("date.month.1", "January"),
    ("date.month.2", "February"),
    ("date.month.3", "March"),
    ("date.month.4", "April"),
    ("date.month.5", "May"),
    ("date.month.6", "June"),
    ("date.month.7", "July"),
    ("date.month.8", "August"),
    ("date.month.9", "September"),
    ("date.month.10", "October"),
    ("date.month.11", "November"),
    ("date.month.12", "December"),
];

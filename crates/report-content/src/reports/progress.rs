//! Workflow progress report

use shared_types::ProgressMetrics;

use crate::sections::{format_number, format_rate, SectionWriter};

pub fn write_progress(out: &mut SectionWriter<'_>, metrics: &ProgressMetrics) {
    let m = metrics.resolve();
    let total = format_number(m.total_workflows);
    let completed = format_number(m.completed_workflows);
    let in_progress = format_number(m.in_progress_workflows);
    let pending = format_number(m.pending_workflows);
    let overdue = format_number(m.overdue_tasks);
    let rate = format_rate(out.translator(), m.completion_rate);

    out.section("section.executive_summary");
    out.line_key("progress.summary", &[]);

    out.section("section.workflow_status");
    out.line_key("progress.total", &[("count", total.as_str())]);
    out.line_key("progress.completed", &[("count", completed.as_str())]);
    out.line_key("progress.in_progress", &[("count", in_progress.as_str())]);
    out.line_key("progress.pending", &[("count", pending.as_str())]);
    out.line_key("progress.completion_rate", &[("rate", rate.as_str())]);
    out.line_key("progress.overdue", &[("count", overdue.as_str())]);

    out.section("section.milestones");
    out.list_or_empty(&m.milestones, "progress.no_milestones");

    out.section("section.next_steps");
    out.list_keys(&[
        "progress.next_step.1",
        "progress.next_step.2",
        "progress.next_step.3",
    ]);

    out.section("section.conclusion");
    out.line_key(
        "progress.conclusion",
        &[("completed", completed.as_str()), ("total", total.as_str())],
    );
}

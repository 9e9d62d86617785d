pub(super) const ENTRIES: &[(&str, &str)] = &[
    ("report.title.compliance", "Rapport de conformité du contrôle interne"),
    ("report.title.progress", "Rapport d'avancement des processus"),
    ("report.title.performance", "Rapport de performance du contrôle interne"),
    ("report.title.risk", "Rapport d'évaluation des risques"),
    ("section.executive_summary", "Résumé analytique"),
    ("section.component_analysis", "Analyse des composantes COSO"),
    ("section.recommendations", "Recommandations"),
    ("section.next_steps", "Prochaines étapes"),
    ("section.conclusion", "Conclusion"),
    ("section.workflow_status", "État des processus"),
    ("section.milestones", "Jalons atteints"),
    ("section.performance_metrics", "Indicateurs de performance"),
    ("section.improvement_areas", "Axes d'amélioration"),
    ("section.risk_profile", "Profil de risque"),
    ("section.high_risk_areas", "Zones à risque élevé"),
    ("section.mitigation", "Mesures d'atténuation recommandées"),
    ("common.not_available", "Non disponible"),
    ("score.excellent", "Excellent"),
    ("score.good", "Bon"),
    ("score.satisfactory", "Satisfaisant"),
    ("score.needs_improvement", "À améliorer"),
    ("score.critical", "Critique"),
    ("score.not_evaluated", "Non évalué"),
    ("coso.control_environment", "Environnement de contrôle"),
    ("coso.risk_assessment", "Évaluation des risques"),
    ("coso.control_activities", "Activités de contrôle"),
    ("coso.information_communication", "Information et communication"),
    ("coso.monitoring", "Activités de pilotage"),
    (
        "compliance.summary",
        "Le présent rapport expose l'état de conformité du contrôle interne de l'institution, évalué au regard des cinq composantes du référentiel COSO.",
    ),
    ("compliance.overall_score", "Score global de conformité : {{score}}% ({{label}})"),
    ("compliance.assessments_completed", "Auto-évaluations réalisées : {{count}}"),
    ("compliance.last_assessment", "Date de la dernière évaluation : {{date}}"),
    ("compliance.component_line", "{{index}}. {{component}} : {{score}}% - {{label}}"),
    ("compliance.no_recommendations", "Aucune recommandation pour le moment."),
    ("compliance.next_step.1", "Traiter en priorité les composantes notées en dessous de Satisfaisant."),
    ("compliance.next_step.2", "Mettre à jour les pièces justificatives de chaque objectif de contrôle."),
    ("compliance.next_step.3", "Planifier le prochain cycle d'auto-évaluation."),
    (
        "compliance.conclusion",
        "Le système de contrôle interne est globalement jugé {{label}}. Un suivi continu et la mise en œuvre des recommandations permettront de maintenir la conformité.",
    ),
    (
        "progress.summary",
        "Le présent rapport résume l'avancement des processus de contrôle interne de l'institution.",
    ),
    ("progress.total", "Nombre total de processus : {{count}}"),
    ("progress.completed", "Processus terminés : {{count}}"),
    ("progress.in_progress", "Processus en cours : {{count}}"),
    ("progress.pending", "Processus en attente : {{count}}"),
    ("progress.completion_rate", "Taux d'achèvement : {{rate}}"),
    ("progress.overdue", "Tâches en retard : {{count}}"),
    ("progress.no_milestones", "Aucun jalon n'a été enregistré pour cette période."),
    ("progress.next_step.1", "Résorber les tâches en retard et réaffecter les étapes bloquées."),
    ("progress.next_step.2", "Revoir les processus en attente avec leurs responsables."),
    ("progress.next_step.3", "Fixer les jalons de la prochaine période."),
    (
        "progress.conclusion",
        "{{completed}} processus sur {{total}} sont terminés. L'avancement sera réexaminé à la prochaine échéance.",
    ),
    (
        "performance.summary",
        "Le présent rapport évalue la performance du système de contrôle interne sur la période.",
    ),
    ("performance.effectiveness", "Efficacité des contrôles : {{rate}}"),
    ("performance.assessments", "Évaluations réalisées : {{count}}"),
    ("performance.documents", "Pièces justificatives déposées : {{count}}"),
    ("performance.response_days", "Délai moyen de réponse : {{days}} jours"),
    ("performance.objectives", "Objectifs de contrôle atteints : {{met}} sur {{total}}"),
    ("performance.no_improvement_areas", "Aucun axe d'amélioration n'a été identifié."),
    ("performance.next_step.1", "Renforcer les contrôles dans les axes d'amélioration identifiés."),
    ("performance.next_step.2", "Réduire les délais de réponse des évaluations en cours."),
    ("performance.next_step.3", "Documenter les justificatifs de chaque objectif atteint."),
    (
        "performance.conclusion",
        "L'efficacité des contrôles s'établit à {{rate}}. La performance continuera d'être suivie au regard des objectifs de contrôle.",
    ),
    (
        "risk.summary",
        "Le présent rapport expose le profil de risque de l'institution et l'état des mesures d'atténuation.",
    ),
    ("risk.overall_score", "Score de risque global : {{score}}"),
    ("risk.total", "Risques identifiés : {{count}}"),
    ("risk.high", "Risques élevés : {{count}}"),
    ("risk.medium", "Risques moyens : {{count}}"),
    ("risk.low", "Risques faibles : {{count}}"),
    ("risk.mitigated", "Risques atténués : {{count}}"),
    ("risk.no_high_risk_areas", "Aucune zone à risque élevé n'a été signalée."),
    ("risk.mitigation.1", "Désigner un responsable et une échéance pour chaque risque élevé."),
    ("risk.mitigation.2", "Concevoir des contrôles compensatoires pour les risques inévitables."),
    ("risk.mitigation.3", "Réévaluer le risque résiduel après la mise en place des mesures."),
    (
        "risk.conclusion",
        "{{high}} risques élevés requièrent l'attention de la direction. Le registre des risques sera revu lors de la prochaine évaluation.",
    ),
    ("render.report_number", "Numéro du rapport : {{number}}"),
    ("render.report_date", "Date du rapport : {{date}}"),
    ("render.report_content", "CONTENU DU RAPPORT"),
    (
        "render.generated_by",
        "Généré par le système de gestion du contrôle interne le {{date}}",
    ),
    (
        "render.confidential",
        "Ce rapport est confidentiel et réservé à un usage interne.",
    ),
    ("date.long", "{{day}} {{month}} {{year}}"),
    ("date.month.1", "janvier"),
    ("date.month.2", "février"),
    ("date.month.3", "mars"),
    ("date.month.4", "avril"),
    ("date.month.5", "mai"),
    ("date.month.6", "juin"),
    ("date.month.7", "juillet"),
    ("date.month.8", "août"),
    ("date.month.9", "septembre"),
    ("date.month.10", "octobre"),
    ("date.month.11", "novembre"),
    ("date.month.12", "décembre"),
];

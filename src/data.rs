//! Static reference data shown across the dashboard sections.
//!
//! Everything here is fixed sample content. Nothing is loaded from disk or
//! network; the rows only change by editing this file.

use egui::Color32;

use crate::theme;

/// Headline indicator shown on the home page and the KPI dashboard.
pub struct Kpi {
    pub name: &'static str,
    pub value: &'static str,
    pub unit: &'static str,
    pub color: Color32,
}

pub const KPIS: [Kpi; 4] = [
    Kpi {
        name: "MTBF",
        value: "8760",
        unit: "hours",
        color: theme::EMERALD,
    },
    Kpi {
        name: "MTTR",
        value: "4.2",
        unit: "hours",
        color: theme::BLUE,
    },
    Kpi {
        name: "Availability",
        value: "99.95",
        unit: "%",
        color: theme::VIOLET,
    },
    Kpi {
        name: "Failure Rate",
        value: "0.000114",
        unit: "1/h",
        color: theme::RED,
    },
];

/// One row of the FMEA worksheet. Scores use the usual 1-10 scales.
pub struct FmeaRow {
    pub component: &'static str,
    pub failure_mode: &'static str,
    pub severity: u8,
    pub occurrence: u8,
    pub detection: u8,
}

impl FmeaRow {
    /// Risk priority number: severity x occurrence x detection.
    pub fn rpn(&self) -> u32 {
        u32::from(self.severity) * u32::from(self.occurrence) * u32::from(self.detection)
    }
}

pub const FMEA_ROWS: [FmeaRow; 4] = [
    FmeaRow {
        component: "Bearing",
        failure_mode: "Fatigue",
        severity: 8,
        occurrence: 5,
        detection: 6,
    },
    FmeaRow {
        component: "Sensor",
        failure_mode: "Drift",
        severity: 6,
        occurrence: 4,
        detection: 3,
    },
    FmeaRow {
        component: "Motor",
        failure_mode: "Overheating",
        severity: 9,
        occurrence: 3,
        detection: 4,
    },
    FmeaRow {
        component: "Controller",
        failure_mode: "Software bug",
        severity: 7,
        occurrence: 2,
        detection: 5,
    },
];

/// Severity band of a score, used for RPN badges and prediction labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn for_rpn(rpn: u32) -> Self {
        if rpn > 200 {
            Self::High
        } else if rpn > 100 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }

    pub fn color(self) -> Color32 {
        match self {
            Self::Low => theme::EMERALD,
            Self::Medium => theme::AMBER,
            Self::High => theme::RED,
        }
    }
}

/// Cell color for the 5x5 risk matrix, where `risk = severity x probability`.
pub fn risk_matrix_color(risk: u32) -> Color32 {
    if risk > 15 {
        theme::RED
    } else if risk > 10 {
        theme::AMBER
    } else if risk > 5 {
        theme::YELLOW
    } else {
        theme::EMERALD
    }
}

/// Monthly work-order counts by maintenance strategy.
pub struct MaintenanceMonth {
    pub month: &'static str,
    pub corrective: u32,
    pub preventive: u32,
    pub predictive: u32,
}

pub const MAINTENANCE_BY_MONTH: [MaintenanceMonth; 6] = [
    MaintenanceMonth {
        month: "Jan",
        corrective: 12,
        preventive: 8,
        predictive: 3,
    },
    MaintenanceMonth {
        month: "Feb",
        corrective: 10,
        preventive: 9,
        predictive: 5,
    },
    MaintenanceMonth {
        month: "Mar",
        corrective: 8,
        preventive: 10,
        predictive: 7,
    },
    MaintenanceMonth {
        month: "Apr",
        corrective: 6,
        preventive: 11,
        predictive: 9,
    },
    MaintenanceMonth {
        month: "May",
        corrective: 5,
        preventive: 10,
        predictive: 12,
    },
    MaintenanceMonth {
        month: "Jun",
        corrective: 3,
        preventive: 9,
        predictive: 15,
    },
];

/// Benchmark scores of the candidate failure-prediction models, in percent.
pub struct ModelScore {
    pub model: &'static str,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

pub const MODEL_SCORES: [ModelScore; 4] = [
    ModelScore {
        model: "Random Forest",
        accuracy: 94.5,
        precision: 92.3,
        recall: 96.1,
        f1: 94.2,
    },
    ModelScore {
        model: "Neural Network",
        accuracy: 96.2,
        precision: 95.1,
        recall: 97.3,
        f1: 96.2,
    },
    ModelScore {
        model: "SVM",
        accuracy: 91.8,
        precision: 89.7,
        recall: 93.4,
        f1: 91.5,
    },
    ModelScore {
        model: "XGBoost",
        accuracy: 95.7,
        precision: 94.2,
        recall: 96.8,
        f1: 95.5,
    },
];

/// Failure tally by origin, with representative examples.
pub struct FailureCategory {
    pub label: &'static str,
    pub count: u32,
    pub color: Color32,
    pub examples: [&'static str; 3],
}

pub const FAILURE_CATEGORIES: [FailureCategory; 3] = [
    FailureCategory {
        label: "Hardware Failures",
        count: 45,
        color: theme::RED,
        examples: ["Bearing wear", "Corrosion", "Fatigue cracks"],
    },
    FailureCategory {
        label: "Software Failures",
        count: 23,
        color: theme::BLUE,
        examples: ["Logic errors", "Memory leaks", "Race conditions"],
    },
    FailureCategory {
        label: "Human Errors",
        count: 12,
        color: theme::AMBER,
        examples: ["Operator mistakes", "Maintenance errors", "Design flaws"],
    },
];

/// A labelled percentage slice, for distribution-style bar charts.
pub struct Share {
    pub label: &'static str,
    pub percent: u32,
    pub color: Color32,
}

pub const FAILURE_MODE_SHARES: [Share; 4] = [
    Share {
        label: "Mechanical",
        percent: 40,
        color: theme::RED,
    },
    Share {
        label: "Electrical",
        percent: 25,
        color: theme::BLUE,
    },
    Share {
        label: "Software",
        percent: 20,
        color: theme::VIOLET,
    },
    Share {
        label: "Human",
        percent: 15,
        color: theme::AMBER,
    },
];

pub const RESOURCE_ALLOCATION: [Share; 4] = [
    Share {
        label: "Maintenance",
        percent: 35,
        color: theme::BLUE,
    },
    Share {
        label: "Inspection",
        percent: 25,
        color: theme::VIOLET,
    },
    Share {
        label: "Training",
        percent: 20,
        color: theme::EMERALD,
    },
    Share {
        label: "Improvements",
        percent: 20,
        color: theme::AMBER,
    },
];

/// The three availability figures of the modeling section.
pub struct AvailabilityFigure {
    pub value: &'static str,
    pub label: &'static str,
    pub note: &'static str,
    pub color: Color32,
}

pub const AVAILABILITY_FIGURES: [AvailabilityFigure; 3] = [
    AvailabilityFigure {
        value: "99.95%",
        label: "Inherent Availability",
        note: "A = MTBF/(MTBF+MTTR)",
        color: theme::EMERALD,
    },
    AvailabilityFigure {
        value: "99.82%",
        label: "Achieved Availability",
        note: "Includes PM downtime",
        color: theme::BLUE,
    },
    AvailabilityFigure {
        value: "99.67%",
        label: "Operational Availability",
        note: "Includes logistic delays",
        color: theme::VIOLET,
    },
];

/// Lifetime distribution card for the estimation section.
pub struct DistributionCard {
    pub name: &'static str,
    pub summary: &'static str,
    pub density: &'static str,
}

pub const DISTRIBUTIONS: [DistributionCard; 3] = [
    DistributionCard {
        name: "Weibull Distribution",
        summary: "Models time to failure with shape and scale parameters",
        density: "f(t) = (β/η)(t/η)^(β-1)e^(-(t/η)^β)",
    },
    DistributionCard {
        name: "Exponential Distribution",
        summary: "Constant failure rate model",
        density: "f(t) = λe^(-λt)",
    },
    DistributionCard {
        name: "Log-Normal Distribution",
        summary: "The logarithm of the variable is normally distributed",
        density: "f(t) = 1/(tσ√2π)e^(-(ln t-μ)²/2σ²)",
    },
];

/// Software reliability growth model card.
pub struct GrowthModel {
    pub name: &'static str,
    pub summary: &'static str,
    pub formula: &'static str,
    pub terms: [&'static str; 3],
    pub color: Color32,
}

pub const GROWTH_MODELS: [GrowthModel; 2] = [
    GrowthModel {
        name: "Jelinski-Moranda Model",
        summary: "Assumes a constant per-fault detection rate",
        formula: "λ(t) = φ[N - (i-1)]",
        terms: [
            "N: initial number of faults",
            "φ: detection rate constant",
            "i: current failure index",
        ],
        color: theme::BLUE,
    },
    GrowthModel {
        name: "Goel-Okumoto Model",
        summary: "Non-homogeneous Poisson process",
        formula: "m(t) = a(1 - e^(-bt))",
        terms: [
            "a: expected total faults",
            "b: fault detection rate",
            "m(t): cumulative faults",
        ],
        color: theme::VIOLET,
    },
];

/// THERP base human-error probabilities by task complexity.
pub const THERP_PROBABILITIES: [(&str, f64); 3] = [
    ("Simple task", 0.001),
    ("Moderate task", 0.01),
    ("Complex task", 0.1),
];

/// Basic events feeding the fault tree's OR gate.
pub const FAULT_TREE_EVENTS: [(&str, f64); 2] = [
    ("Component A failure", 0.05),
    ("Component B failure", 0.03),
];

/// Top-event probability of the fault tree: 1 - prod(1 - p_i).
pub fn fault_tree_top_probability() -> f64 {
    1.0 - FAULT_TREE_EVENTS
        .iter()
        .map(|(_, p)| 1.0 - p)
        .product::<f64>()
}

/// Live condition indicator, as a percentage of nominal.
pub struct HealthMetric {
    pub name: &'static str,
    pub percent: u8,
    pub color: Color32,
}

pub const HEALTH_METRICS: [HealthMetric; 4] = [
    HealthMetric {
        name: "Vibration Level",
        percent: 85,
        color: theme::EMERALD,
    },
    HealthMetric {
        name: "Temperature",
        percent: 72,
        color: theme::BLUE,
    },
    HealthMetric {
        name: "Pressure",
        percent: 68,
        color: theme::VIOLET,
    },
    HealthMetric {
        name: "Performance",
        percent: 92,
        color: theme::CYAN,
    },
];

/// Remaining-life estimate for one monitored component.
pub struct FailurePrediction {
    pub component: &'static str,
    pub days_to_failure: u32,
    pub risk: RiskLevel,
}

pub const FAILURE_PREDICTIONS: [FailurePrediction; 4] = [
    FailurePrediction {
        component: "Bearing A",
        days_to_failure: 45,
        risk: RiskLevel::Low,
    },
    FailurePrediction {
        component: "Motor B",
        days_to_failure: 12,
        risk: RiskLevel::High,
    },
    FailurePrediction {
        component: "Sensor C",
        days_to_failure: 28,
        risk: RiskLevel::Medium,
    },
    FailurePrediction {
        component: "Pump D",
        days_to_failure: 67,
        risk: RiskLevel::Low,
    },
];

/// Feature bullets for the two highlighted prediction approaches.
pub struct ApproachCard {
    pub name: &'static str,
    pub color: Color32,
    pub points: [&'static str; 4],
}

pub const ML_APPROACHES: [ApproachCard; 2] = [
    ApproachCard {
        name: "Random Forest Approach",
        color: theme::BLUE,
        points: [
            "Ensemble of decision trees",
            "Handles nonlinear relationships",
            "Feature importance analysis",
            "Accuracy: 94.5%",
        ],
    },
    ApproachCard {
        name: "Neural Network",
        color: theme::VIOLET,
        points: [
            "Deep learning architecture",
            "Captures complex patterns",
            "Needs more training data",
            "Accuracy: 96.2%",
        ],
    },
];

/// Line item of the cost-benefit card.
pub struct CostLine {
    pub label: &'static str,
    pub amount: &'static str,
    pub color: Color32,
}

pub const COST_BENEFIT_LINES: [CostLine; 3] = [
    CostLine {
        label: "Implementation cost",
        amount: "$250K",
        color: theme::RED,
    },
    CostLine {
        label: "Annual savings",
        amount: "$180K",
        color: theme::EMERALD,
    },
    CostLine {
        label: "Payback period",
        amount: "16 months",
        color: theme::BLUE,
    },
];

pub const FIVE_YEAR_NET_BENEFIT: &str = "$650K";

/// Industrial deployment summary.
pub struct CaseStudy {
    pub title: &'static str,
    pub industry: &'static str,
    pub approach: &'static str,
    pub improvement: &'static str,
    pub color: Color32,
}

pub const CASE_STUDIES: [CaseStudy; 3] = [
    CaseStudy {
        title: "Wind Turbine Monitoring",
        industry: "Energy",
        approach: "Predictive",
        improvement: "+35% availability",
        color: theme::EMERALD,
    },
    CaseStudy {
        title: "Railway System Safety",
        industry: "Transport",
        approach: "Risk-based",
        improvement: "-60% failures",
        color: theme::BLUE,
    },
    CaseStudy {
        title: "Manufacturing Production Line",
        industry: "Mechanical",
        approach: "Data-driven",
        improvement: "-45% downtime",
        color: theme::VIOLET,
    },
];

/// Row of the classical vs data-driven comparison table.
pub struct ComparisonRow {
    pub aspect: &'static str,
    pub classical: &'static str,
    pub data_driven: &'static str,
}

pub const APPROACH_COMPARISON: [ComparisonRow; 5] = [
    ComparisonRow {
        aspect: "Data requirements",
        classical: "Historical failure data",
        data_driven: "Real-time sensor data",
    },
    ComparisonRow {
        aspect: "Accuracy",
        classical: "70-80%",
        data_driven: "90-97%",
    },
    ComparisonRow {
        aspect: "Lead time",
        classical: "Days to weeks",
        data_driven: "Hours to days",
    },
    ComparisonRow {
        aspect: "Cost",
        classical: "Lower upfront",
        data_driven: "Higher upfront, lower long-term",
    },
    ComparisonRow {
        aspect: "Adaptability",
        classical: "Limited",
        data_driven: "Continuous learning",
    },
];

/// Book-length reference with topic tags.
pub struct Publication {
    pub title: &'static str,
    pub authors: &'static str,
    pub year: u16,
    pub venue: &'static str,
    pub summary: &'static str,
    pub topics: &'static [&'static str],
}

pub const FOUNDATIONAL_BOOKS: [Publication; 3] = [
    Publication {
        title: "Reliability Engineering: Theory and Practice",
        authors: "Alessandro Birolini",
        year: 2017,
        venue: "Springer",
        summary: "Comprehensive reference covering reliability engineering \
                  fundamentals, including mathematical modeling, statistical \
                  methods and practical applications.",
        topics: &["Weibull models", "MTBF/MTTR", "Availability", "Maintainability"],
    },
    Publication {
        title: "System Reliability Theory: Models, Statistical Methods, and Applications",
        authors: "Marvin Rausand, Arnljot Høyland",
        year: 2004,
        venue: "Wiley-Interscience",
        summary: "Covers system reliability models, statistical methods for \
                  failure data analysis and industrial applications.",
        topics: &["Series/parallel systems", "Survival analysis", "Parametric estimation"],
    },
    Publication {
        title: "Weibull Analysis: A Simplified Approach",
        authors: "Paul Barringer",
        year: 2008,
        venue: "Reliability Engineering",
        summary: "Practical guide to applying the Weibull distribution in \
                  reliability analysis and lifetime prediction.",
        topics: &["Graphical analysis", "Parameter estimation", "Physical interpretation"],
    },
];

/// International standard summary card.
pub struct Standard {
    pub code: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
}

pub const STANDARDS: [Standard; 4] = [
    Standard {
        code: "IEC 61508",
        title: "Functional Safety of Systems",
        summary: "International standard for the functional safety of \
                  electrical/electronic/programmable safety-related systems.",
        tags: &["SIL 1-4", "Quantitative analysis", "Validation"],
    },
    Standard {
        code: "MIL-HDBK-217F",
        title: "Reliability Prediction of Electronic Equipment",
        summary: "Standard methodology for predicting the failure rate of \
                  electronic and electrical components.",
        tags: &["Failure rates", "Environmental factors", "Component stress"],
    },
    Standard {
        code: "ISO 14224",
        title: "Collection and Exchange of Reliability Data",
        summary: "Standard for collecting and exchanging reliability and \
                  maintenance data for the oil and gas industry.",
        tags: &["Taxonomy", "Data format", "Key indicators"],
    },
    Standard {
        code: "IEC 60812",
        title: "Failure Mode and Effects Analysis (FMEA/FMECA)",
        summary: "Procedures for the systematic analysis of failure modes \
                  and their critical effects.",
        tags: &["FMEA", "Criticality", "RPN"],
    },
];

/// Journal article with impact factor and keywords.
pub struct ResearchPaper {
    pub title: &'static str,
    pub authors: &'static str,
    pub year: u16,
    pub venue: &'static str,
    pub impact_factor: f64,
    pub summary: &'static str,
    pub keywords: &'static [&'static str],
}

pub const RECENT_PAPERS: [ResearchPaper; 3] = [
    ResearchPaper {
        title: "Deep Learning for Predictive Maintenance: A Survey",
        authors: "Zhang et al.",
        year: 2022,
        venue: "IEEE Transactions on Reliability",
        impact_factor: 5.9,
        summary: "Comprehensive review of deep learning approaches for \
                  predictive maintenance, including CNN, RNN, LSTM and \
                  transformers.",
        keywords: &["Deep Learning", "Predictive Maintenance", "CNN", "LSTM"],
    },
    ResearchPaper {
        title: "Remaining Useful Life Prediction Using Machine Learning",
        authors: "Li, Wang & Zhang",
        year: 2023,
        venue: "Reliability Engineering & System Safety",
        impact_factor: 8.1,
        summary: "Comparative analysis of ML algorithms for remaining useful \
                  life prediction in critical industrial systems.",
        keywords: &["RUL", "Random Forest", "XGBoost", "Neural Networks"],
    },
    ResearchPaper {
        title: "Digital Twin for Predictive Maintenance in Industry 4.0",
        authors: "Tao, Zhang & Nee",
        year: 2021,
        venue: "International Journal of Production Research",
        impact_factor: 9.2,
        summary: "Framework for using digital twins in predictive maintenance \
                  with IoT integration and real-time analytics.",
        keywords: &["Digital Twin", "IoT", "Industry 4.0", "Real-time Analytics"],
    },
];

/// Commercial or open-source reliability tool.
pub struct SoftwareTool {
    pub name: &'static str,
    pub category: &'static str,
    pub features: [&'static str; 3],
}

pub const RELIABILITY_TOOLS: [SoftwareTool; 6] = [
    SoftwareTool {
        name: "Weibull++",
        category: "Statistical Analysis",
        features: ["Weibull analysis", "Accelerated testing", "Test planning"],
    },
    SoftwareTool {
        name: "ReliaSoft BlockSim",
        category: "System Simulation",
        features: [
            "Reliability block diagrams",
            "Monte Carlo simulation",
            "Maintenance optimization",
        ],
    },
    SoftwareTool {
        name: "MATLAB Reliability Toolbox",
        category: "Advanced Modeling",
        features: ["Parametric models", "Survival analysis", "Custom scripts"],
    },
    SoftwareTool {
        name: "Python Libraries",
        category: "Open Source",
        features: ["reliability", "lifelines", "scipy.stats"],
    },
    SoftwareTool {
        name: "R Packages",
        category: "Statistical Analysis",
        features: ["survival", "fitdistrplus", "WeibullR"],
    },
    SoftwareTool {
        name: "RAM Commander",
        category: "RAMS Analysis",
        features: ["FMEA/FMECA", "FTA", "RBD"],
    },
];

pub const PYTHON_SCRIPTS: [&str; 5] = [
    "weibull_analysis.py",
    "reliability_models.py",
    "fmea_calculator.py",
    "ml_predictor.py",
    "visualization_tools.py",
];

pub const MATLAB_SCRIPTS: [&str; 5] = [
    "reliability_block_diagram.m",
    "fault_tree_analysis.m",
    "monte_carlo_simulation.m",
    "system_dynamics.m",
    "optimization_tools.m",
];

/// Benchmark dataset pointer.
pub struct Dataset {
    pub name: &'static str,
    pub size: &'static str,
    pub summary: &'static str,
}

pub const DATASETS: [Dataset; 3] = [
    Dataset {
        name: "C-MAPSS Dataset",
        size: "250 MB",
        summary: "Turbofan engine degradation",
    },
    Dataset {
        name: "NASA PHM Dataset",
        size: "180 MB",
        summary: "Run-to-failure bearing data",
    },
    Dataset {
        name: "Industrial Sensors",
        size: "420 MB",
        summary: "Production line telemetry",
    },
];

pub const REFERENCE_DOCS: [&str; 5] = [
    "IEEE Standard 493-2007: Gold Book on reliability",
    "MIL-HDBK-217F: reliability prediction of electronic equipment",
    "ISO 14224: collection and exchange of reliability data",
    "IEC 61508: functional safety standards",
    "NASA Reliability Handbook",
];

/// One of the three technical documents offered by the viewer.
pub struct DocumentSlot {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub path: &'static str,
}

pub const DOCUMENT_SLOTS: [DocumentSlot; 3] = [
    DocumentSlot {
        title: "Reliability Guide",
        subtitle: "Fundamental principles",
        path: "docs/reliability_guide.pdf",
    },
    DocumentSlot {
        title: "FMEA Analysis",
        subtitle: "Complete methodology",
        path: "docs/fmea_methodology.pdf",
    },
    DocumentSlot {
        title: "Predictive Maintenance",
        subtitle: "ML approaches",
        path: "docs/predictive_maintenance.pdf",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmea_rpn_matches_published_worksheet() {
        let expected = [240, 72, 108, 70];
        for (row, want) in FMEA_ROWS.iter().zip(expected) {
            assert_eq!(row.rpn(), want, "RPN for {}", row.component);
        }
    }

    #[test]
    fn rpn_bands_use_the_badge_thresholds() {
        assert_eq!(RiskLevel::for_rpn(240), RiskLevel::High);
        assert_eq!(RiskLevel::for_rpn(201), RiskLevel::High);
        assert_eq!(RiskLevel::for_rpn(200), RiskLevel::Medium);
        assert_eq!(RiskLevel::for_rpn(108), RiskLevel::Medium);
        assert_eq!(RiskLevel::for_rpn(101), RiskLevel::Medium);
        assert_eq!(RiskLevel::for_rpn(100), RiskLevel::Low);
        assert_eq!(RiskLevel::for_rpn(70), RiskLevel::Low);
    }

    #[test]
    fn risk_matrix_bands_cover_all_products() {
        assert_eq!(risk_matrix_color(25), theme::RED);
        assert_eq!(risk_matrix_color(16), theme::RED);
        assert_eq!(risk_matrix_color(15), theme::AMBER);
        assert_eq!(risk_matrix_color(12), theme::AMBER);
        assert_eq!(risk_matrix_color(10), theme::YELLOW);
        assert_eq!(risk_matrix_color(6), theme::YELLOW);
        assert_eq!(risk_matrix_color(5), theme::EMERALD);
        assert_eq!(risk_matrix_color(1), theme::EMERALD);
    }

    #[test]
    fn fault_tree_or_gate_probability() {
        // 1 - (1 - 0.05)(1 - 0.03) = 0.0785
        assert!((fault_tree_top_probability() - 0.0785).abs() < 1e-12);
    }

    #[test]
    fn percentage_shares_sum_to_one_hundred() {
        let modes: u32 = FAILURE_MODE_SHARES.iter().map(|s| s.percent).sum();
        let alloc: u32 = RESOURCE_ALLOCATION.iter().map(|s| s.percent).sum();
        assert_eq!(modes, 100);
        assert_eq!(alloc, 100);
    }

    #[test]
    fn document_slots_are_three_distinct_pdfs() {
        assert_eq!(DOCUMENT_SLOTS.len(), 3);
        for (i, slot) in DOCUMENT_SLOTS.iter().enumerate() {
            assert!(slot.path.ends_with(".pdf"), "slot {i}");
            for other in DOCUMENT_SLOTS.iter().skip(i + 1) {
                assert_ne!(slot.path, other.path);
            }
        }
    }
}

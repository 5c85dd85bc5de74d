use crate::checks;
use crate::classify::{classify_file_path, classify_import_path};
use crate::fingerprint::fingerprint_for_import;
use crate::layers::{DependencyTable, Layer};
use crate::model::{ImportEdge, SourceModel, Violation};
use crate::policy::{EffectiveConfig, FailOn, PolicyConfig};
use crate::report::{DomainReport, SeverityCounts};
use layerguard_types::{Finding, LayerguardData, Severity, Verdict};
use rayon::prelude::*;
use serde_json::json;

/// Evaluates import edges against one policy. Holds no per-edge state, so a single
/// engine can be shared across threads.
#[derive(Clone, Copy, Debug)]
pub struct PolicyEngine<'a> {
    config: &'a PolicyConfig,
    table: &'static DependencyTable,
}

impl<'a> PolicyEngine<'a> {
    pub fn new(config: &'a PolicyConfig) -> Self {
        Self {
            config,
            table: DependencyTable::standard(),
        }
    }

    pub fn config(&self) -> &'a PolicyConfig {
        self.config
    }

    pub fn source_layer(&self, edge: &ImportEdge) -> Option<Layer> {
        classify_file_path(edge.source_file.as_str(), &self.config.root_marker)
    }

    /// Run both check families on one edge, direction first.
    ///
    /// Neither family short-circuits the other: an ignored direction still gets
    /// its public API checked.
    pub fn evaluate(&self, edge: &ImportEdge, source_layer: Option<Layer>) -> Vec<Violation> {
        let import = classify_import_path(&edge.import_path, self.config);

        let direction = checks::check_direction(
            self.table,
            source_layer,
            &import,
            &self.config.ignore_import_patterns,
            &edge.import_path,
        );
        let boundary =
            checks::check_public_api_boundary(edge.source_file.as_str(), &import, self.config);

        direction
            .into_iter()
            .chain(boundary)
            .map(|kind| Violation {
                kind,
                edge: edge.clone(),
            })
            .collect()
    }

    /// [`PolicyEngine::evaluate`] with the source layer taken from the edge's file path.
    pub fn evaluate_edge(&self, edge: &ImportEdge) -> Vec<Violation> {
        self.evaluate(edge, self.source_layer(edge))
    }

    /// Evaluate a batch in parallel. Output keeps input order.
    pub fn evaluate_all(&self, edges: &[ImportEdge]) -> Vec<Violation> {
        edges
            .par_iter()
            .flat_map_iter(|edge| self.evaluate_edge(edge))
            .collect()
    }
}

pub fn evaluate(model: &SourceModel, cfg: &EffectiveConfig) -> DomainReport {
    let engine = PolicyEngine::new(&cfg.policy);

    let mut findings: Vec<Finding> = engine
        .evaluate_all(&model.edges)
        .iter()
        .filter_map(|v| {
            let policy = cfg.check_policy(v.kind.check_id())?;
            Some(to_finding(&engine, v, policy.severity))
        })
        .collect();

    // Deterministic ordering before truncation.
    findings.sort_by(compare_findings);

    let total = findings.len() as u32;

    let mut emitted = findings;
    let mut truncated_reason: Option<String> = None;
    if emitted.len() > cfg.max_findings {
        emitted.truncate(cfg.max_findings);
        truncated_reason = Some(format!(
            "findings truncated to max_findings={}",
            cfg.max_findings
        ));
    }

    let verdict = compute_verdict(&emitted, cfg.fail_on);
    let counts = SeverityCounts::from_findings(&emitted);

    let data = LayerguardData {
        profile: cfg.profile.clone(),
        files_scanned: model.files.len() as u32,
        imports_scanned: model.edges.len() as u32,
        findings_total: total,
        findings_emitted: emitted.len() as u32,
        truncated_reason,
    };

    DomainReport {
        verdict,
        findings: emitted,
        data,
        counts,
    }
}

fn to_finding(engine: &PolicyEngine<'_>, v: &Violation, severity: Severity) -> Finding {
    let kind = v.kind;
    let edge = &v.edge;
    let import = classify_import_path(&edge.import_path, engine.config());

    Finding {
        severity,
        check_id: kind.check_id().to_string(),
        code: kind.code().to_string(),
        message: kind.message().to_string(),
        location: edge.location.clone(),
        help: Some(kind.help().to_string()),
        url: None,
        fingerprint: Some(fingerprint_for_import(
            kind.check_id(),
            kind.code(),
            edge.source_file.as_str(),
            &edge.import_path,
        )),
        data: json!({
            "source": edge.source_file.as_str(),
            "import": edge.import_path,
            "source_layer": engine.source_layer(edge).map(Layer::as_str),
            "import_layer": import.layer.map(Layer::as_str),
            "slice": import.slice,
        }),
    }
}

fn compute_verdict(findings: &[Finding], fail_on: FailOn) -> Verdict {
    let has_error = findings.iter().any(|f| f.severity == Severity::Error);
    if has_error {
        return Verdict::Fail;
    }

    let has_warn = findings.iter().any(|f| f.severity == Severity::Warning);
    if has_warn {
        return match fail_on {
            FailOn::Warning => Verdict::Fail,
            FailOn::Error => Verdict::Warn,
        };
    }

    Verdict::Pass
}

pub(crate) fn compare_findings(a: &Finding, b: &Finding) -> std::cmp::Ordering {
    // Ordering priority:
    // 1) severity (error -> warning -> info)
    // 2) location.path (missing last)
    // 3) location.line, then col (missing last)
    // 4) check_id
    // 5) code
    // 6) message
    // 7) fingerprint
    let severity_rank = |sev: Severity| match sev {
        Severity::Error => 0,
        Severity::Warning => 1,
        Severity::Info => 2,
    };
    let key = |f: &Finding| match &f.location {
        Some(l) => (
            l.path.as_str().to_string(),
            l.line.unwrap_or(u32::MAX),
            l.col.unwrap_or(u32::MAX),
        ),
        None => ("~".to_string(), u32::MAX, u32::MAX),
    };
    let (ap, al, ac) = key(a);
    let (bp, bl, bc) = key(b);

    severity_rank(a.severity)
        .cmp(&severity_rank(b.severity))
        .then(ap.cmp(&bp))
        .then(al.cmp(&bl))
        .then(ac.cmp(&bc))
        .then(a.check_id.cmp(&b.check_id))
        .then(a.code.cmp(&b.code))
        .then(a.message.cmp(&b.message))
        .then(a.fingerprint.cmp(&b.fingerprint))
}

//! Test: Properties every pass must keep over a whole tree
//!
//! Runs the passes in order over a sample app, then checks idempotence,
//! hop depth, duplicate removal and that non-import lines never move.

use crate::common::{TestProject, project_settings, sample_app};
use importnorm::rewrite::{ImportLine, ImportTarget, Layout};
use importnorm::{
    CrossReferenceResolver, DepthCorrector, FileWalker, Pass, PrefixNormalizer, Runner, Settings,
};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

fn run_all(project: &TestProject, settings: &Arc<Settings>) {
    let walker = FileWalker::new(Arc::clone(settings));
    let runner = Runner::default();
    let normalizer = PrefixNormalizer::new(settings.layout());

    runner
        .run_tree(&normalizer, &walker, &project.join("lib/screens"), |_| {})
        .unwrap();
    runner
        .run_tree(&normalizer, &walker, &project.join("lib/widgets"), |_| {})
        .unwrap();
    runner.run_files(&DepthCorrector, &settings.depth.nested_files, |_| {});
    runner
        .run_tree(
            &CrossReferenceResolver::default(),
            &walker,
            &project.join("lib/screens"),
            |_| {},
        )
        .unwrap();
}

fn non_import_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .filter(|line| !ImportLine::is_import(line))
        .collect()
}

#[test]
fn test_pipeline_reaches_fixed_point() {
    let project = TestProject::new();
    sample_app(&project);
    let settings = Arc::new(project_settings(&project));

    run_all(&project, &settings);
    let first = project.snapshot("lib");
    run_all(&project, &settings);

    assert_eq!(project.snapshot("lib"), first);
}

#[test]
fn test_shared_imports_use_exact_depth() {
    let project = TestProject::new();
    sample_app(&project);
    let settings = Arc::new(project_settings(&project));

    run_all(&project, &settings);

    let layout: Layout = settings.layout();
    for (path, content) in project.snapshot("lib") {
        let depth = layout.depth_for(Path::new(&path));
        for import in content.lines().filter_map(ImportLine::parse) {
            if let ImportTarget::Shared { hops, .. } = import.classify() {
                assert_eq!(hops, depth.hops(), "{path}: {}", import.target);
            }
        }
    }
}

#[test]
fn test_no_duplicate_import_lines() {
    let project = TestProject::new();
    sample_app(&project);
    let settings = Arc::new(project_settings(&project));

    run_all(&project, &settings);

    for (path, content) in project.snapshot("lib") {
        let mut seen = HashSet::new();
        for line in content.split('\n').filter(|line| ImportLine::is_import(line)) {
            assert!(seen.insert(line), "{path}: duplicate {line}");
        }
    }
}

#[test]
fn test_non_import_lines_preserved() {
    let project = TestProject::new();
    sample_app(&project);
    let before = project.snapshot("lib");
    let settings = Arc::new(project_settings(&project));

    run_all(&project, &settings);
    let after = project.snapshot("lib");

    assert_eq!(before.len(), after.len());
    for ((path, old), (_, new)) in before.iter().zip(after.iter()) {
        assert_eq!(non_import_lines(old), non_import_lines(new), "{path}");
    }
}

#[test]
fn test_each_pass_is_idempotent_on_messy_input() {
    let text = "import '../models/a.dart';\r\n\
                import '../../../models/b.dart';\r\n\
                import '../widgets/widgets.dart';\r\n\
                import \"main_screen.dart\";\r\n\
                import 'admin_login_screen.dart' as admin;\r\n\
                \r\n\
                void main() {}\r\n";
    let path = Path::new("lib/screens/auth/splash_screen.dart");
    let layout = Settings::default().layout();

    let passes: Vec<Box<dyn Pass>> = vec![
        Box::new(PrefixNormalizer::new(layout)),
        Box::new(DepthCorrector),
        Box::new(CrossReferenceResolver::default()),
    ];

    for pass in &passes {
        let once = pass.rewrite(path, text);
        assert_eq!(pass.rewrite(path, &once), once, "{}", pass.name());
        assert_eq!(non_import_lines(&once), non_import_lines(text), "{}", pass.name());
    }
}

#[test]
fn test_three_model_imports_become_one() {
    let project = TestProject::new();
    project.add_file(
        "lib/screens/rewards/my_cards_screen.dart",
        "import '../models/card.dart';\nimport '../models/reward.dart';\nimport '../models/user.dart';\n\nclass MyCards {}\n",
    );
    let settings = Arc::new(project_settings(&project));

    run_all(&project, &settings);

    let content = project.read("lib/screens/rewards/my_cards_screen.dart");
    assert_eq!(
        content,
        "import '../../models/models.dart';\n\nclass MyCards {}\n"
    );
}

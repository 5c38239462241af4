//! Test: Cross-reference resolution over a screens tree

use crate::common::{TestProject, project_settings, sample_app};
use importnorm::{CrossReferenceResolver, FileWalker, Runner};
use std::sync::Arc;

fn resolve(project: &TestProject) {
    let settings = Arc::new(project_settings(project));
    let walker = FileWalker::new(settings);
    Runner::default()
        .run_tree(
            &CrossReferenceResolver::default(),
            &walker,
            &project.join("lib/screens"),
            |_| {},
        )
        .expect("screens root exists");
}

#[test]
fn test_auth_screen_imports_screens_aggregator() {
    let project = TestProject::new();
    sample_app(&project);

    resolve(&project);

    let auth = project.read("lib/screens/auth/auth_screen.dart");
    assert_eq!(auth.matches("import '../screens.dart';").count(), 1);
    assert!(!auth.contains("import 'main_screen.dart';"));
    assert!(!auth.contains("import 'admin_login_screen.dart';"));
}

#[test]
fn test_admin_dashboard_and_profile() {
    let project = TestProject::new();
    sample_app(&project);

    resolve(&project);

    let dashboard = project.read("lib/screens/admin/admin_dashboard_screen.dart");
    assert!(dashboard.contains("import 'user_management_screen.dart';"));
    assert!(dashboard.contains("import '../analytics/analytics_screen.dart';"));
    assert!(dashboard.contains("import '../analytics/feature_usage_screen.dart';"));
    assert!(dashboard.contains("import '../analytics/system_logs_screen.dart';"));

    let profile = project.read("lib/screens/user/profile_screen.dart");
    assert!(profile.contains("import '../settings/settings_screen.dart';"));
}

#[test]
fn test_user_main_screen_reaches_rewards() {
    let project = TestProject::new();
    project.add_file(
        "lib/screens/user/main_screen.dart",
        "import 'home_screen.dart';\nimport 'profile_screen.dart';\nimport 'rewards_screen.dart';\n",
    );

    resolve(&project);

    assert_eq!(
        project.read("lib/screens/user/main_screen.dart"),
        "import 'home_screen.dart';\nimport 'profile_screen.dart';\nimport '../rewards/rewards_screen.dart';\n"
    );
}

#[test]
fn test_co_located_siblings_unchanged() {
    let project = TestProject::new();
    let text = "import 'language_screen.dart';\nimport 'about_screen.dart';\n\nclass SettingsScreen {}\n";
    project.add_file("lib/screens/settings/settings_screen.dart", text);
    project.add_file(
        "lib/screens/user/waste_calendar_screen.dart",
        "import 'add_waste_screen.dart';\n",
    );

    resolve(&project);

    assert_eq!(project.read("lib/screens/settings/settings_screen.dart"), text);
    assert_eq!(
        project.read("lib/screens/user/waste_calendar_screen.dart"),
        "import 'add_waste_screen.dart';\n"
    );
}

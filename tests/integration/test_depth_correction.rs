//! Test: Depth correction over the nested-file list

use crate::common::{TestProject, project_settings};
use importnorm::{DepthCorrector, Outcome, Runner};

const ONE_HOP: &str = "import '../widgets/widgets.dart';
import '../services/services.dart';
import '../constants/app_constants.dart';

class MainScreen {}
";

const TWO_HOP: &str = "import '../../widgets/widgets.dart';
import '../../services/services.dart';
import '../../constants/app_constants.dart';

class MainScreen {}
";

#[test]
fn test_missing_entries_are_skipped() {
    let project = TestProject::new();
    project.add_file("lib/screens/user/main_screen.dart", ONE_HOP);
    project.add_file("lib/screens/auth/splash_screen.dart", ONE_HOP);

    // Only two of the nineteen default entries exist
    let settings = project_settings(&project);
    let report = Runner::default().run_files(&DepthCorrector, &settings.depth.nested_files, |_| {});

    assert!(report.is_success());
    assert_eq!(report.count(Outcome::Fixed), 2);
    assert_eq!(report.count(Outcome::Skipped), 17);
    assert_eq!(project.read("lib/screens/user/main_screen.dart"), TWO_HOP);
    assert_eq!(project.read("lib/screens/auth/splash_screen.dart"), TWO_HOP);
}

#[test]
fn test_unlisted_files_are_untouched() {
    let project = TestProject::new();
    let listed = project.add_file("lib/screens/user/main_screen.dart", ONE_HOP);
    project.add_file("lib/screens/home_screen.dart", ONE_HOP);

    Runner::default().run_files(&DepthCorrector, &[listed], |_| {});

    assert_eq!(project.read("lib/screens/user/main_screen.dart"), TWO_HOP);
    assert_eq!(project.read("lib/screens/home_screen.dart"), ONE_HOP);
}

#[test]
fn test_second_run_changes_nothing() {
    let project = TestProject::new();
    let listed = project.add_file("lib/screens/rewards/rewards_screen.dart", ONE_HOP);

    let first = Runner::default().run_files(&DepthCorrector, &[listed.clone()], |_| {});
    let second = Runner::default().run_files(&DepthCorrector, &[listed], |_| {});

    assert_eq!(first.count(Outcome::Fixed), 1);
    assert_eq!(second.count(Outcome::Unchanged), 1);
    assert_eq!(project.read("lib/screens/rewards/rewards_screen.dart"), TWO_HOP);
}

#[test]
fn test_progress_callback_sees_every_entry() {
    let project = TestProject::new();
    let listed = project.add_file("lib/screens/settings/about_screen.dart", TWO_HOP);
    let missing = project.join("lib/screens/settings/gone_screen.dart");

    let mut seen = Vec::new();
    Runner::default().run_files(&DepthCorrector, &[missing, listed], |file| {
        seen.push((file.path.clone(), file.outcome));
    });

    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].1, Outcome::Skipped);
    assert_eq!(seen[1].1, Outcome::Unchanged);
}

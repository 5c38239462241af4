#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

use importnorm::{FileWalker, Settings};

pub struct TestProject {
    pub dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.dir.path().join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    pub fn read(&self, path: &str) -> String {
        fs::read_to_string(self.dir.path().join(path)).expect("Failed to read file")
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, path: &str) -> PathBuf {
        self.dir.path().join(path)
    }

    /// Snapshot of every file under `root`, relative path -> content
    pub fn snapshot(&self, root: &str) -> Vec<(String, String)> {
        let walker = FileWalker::new(test_settings());
        let base = self.dir.path();
        walker
            .walk(&base.join(root))
            .map(|path| {
                let content = fs::read_to_string(&path).expect("Failed to read file");
                let relative = path
                    .strip_prefix(base)
                    .expect("walked path should be under the project")
                    .to_string_lossy()
                    .replace('\\', "/");
                (relative, content)
            })
            .collect()
    }
}

/// Default settings with the nested-file list rooted in `project`
pub fn project_settings(project: &TestProject) -> Settings {
    let mut settings = Settings::default();
    settings.workspace_root = Some(project.path().to_path_buf());
    settings.depth.nested_files = settings
        .depth
        .nested_files
        .iter()
        .map(|path| project.path().join(path))
        .collect();
    settings
}

pub fn test_settings() -> Arc<Settings> {
    Arc::new(Settings::default())
}

pub mod sample_code {
    pub const PROFILE_SCREEN: &str = "import 'package:flutter/material.dart';
import '../models/user.dart';
import '../models/points.dart';
import '../providers/user_provider.dart';
import '../widgets/points_card.dart';
import 'settings_screen.dart';

class ProfileScreen extends StatelessWidget {
  const ProfileScreen({super.key});
}
";

    pub const AUTH_SCREEN: &str = "import 'package:flutter/material.dart';
import '../constants/app_constants.dart';
import '../services/auth_service.dart';
import 'main_screen.dart';
import 'admin_login_screen.dart';

class AuthScreen extends StatefulWidget {}
";

    pub const HOME_SCREEN: &str = "import 'package:flutter/material.dart';
import '../models/user.dart';
import '../services/api_service.dart';
import '../services/auth_service.dart';
import '../services/storage_service.dart';

class HomeScreen {}
";

    pub const ADMIN_DASHBOARD: &str = "import '../models/admin_stats.dart';
import 'user_management_screen.dart';
import 'analytics_screen.dart';
import 'feature_usage_screen.dart';
import 'system_logs_screen.dart';

class AdminDashboardScreen {}
";

    pub const USER_CARD_WIDGET: &str = "import 'package:flutter/material.dart';
import '../constants/app_constants.dart';
import '../models/user.dart';
import '../providers/theme_provider.dart';
import 'greenpoint_logo.dart';

class UserCard {}
";

    pub const SCREENS_AGGREGATOR: &str = "export 'auth/auth_screen.dart';
export 'user/main_screen.dart';
";
}

/// Lay out a small app tree under `lib/`
pub fn sample_app(project: &TestProject) {
    use sample_code::*;
    project.add_file("lib/screens/user/profile_screen.dart", PROFILE_SCREEN);
    project.add_file("lib/screens/auth/auth_screen.dart", AUTH_SCREEN);
    project.add_file("lib/screens/home_screen.dart", HOME_SCREEN);
    project.add_file("lib/screens/admin/admin_dashboard_screen.dart", ADMIN_DASHBOARD);
    project.add_file("lib/screens/screens.dart", SCREENS_AGGREGATOR);
    project.add_file("lib/widgets/common/user_card.dart", USER_CARD_WIDGET);
    project.add_file("lib/widgets/widgets.dart", "export 'common/user_card.dart';\n");
}

//! PHP starters: plain PHP, Laravel, WordPress

use crate::domain::entities::{TemplateDefinition, TemplateFile};

pub const PHP: TemplateDefinition = TemplateDefinition::new(
    "php",
    "Plain PHP",
    &[TemplateFile::new(
        "index.php",
        r#"<?php

echo "Hello LocalX!";
"#,
    )],
);

pub const LARAVEL: TemplateDefinition = TemplateDefinition::new(
    "laravel",
    "Laravel (minimal scaffold)",
    &[
        TemplateFile::new(
            "artisan",
            r#"#!/usr/bin/env php
<?php

echo "LocalX Laravel placeholder";
"#,
        ),
        TemplateFile::new(
            "composer.json",
            r#"{
  "name": "localx/laravel-app",
  "type": "project",
  "require": {
    "php": "^8.2"
  }
}
"#,
        ),
        TemplateFile::new(
            "public/index.php",
            r#"<?php

echo 'Hello LocalX Laravel';
"#,
        ),
    ],
);

// The empty wp-content/ directory of a real install is not carried:
// archives hold files only.
pub const WORDPRESS: TemplateDefinition = TemplateDefinition::new(
    "wordpress",
    "WordPress (minimal placeholder)",
    &[
        TemplateFile::new(
            "wp-config-sample.php",
            r#"<?php

define('DB_NAME', 'wordpress');
define('DB_USER', 'root');
define('DB_PASSWORD', '');
define('DB_HOST', '127.0.0.1');
"#,
        ),
        TemplateFile::new(
            "index.php",
            r#"<?php

echo 'Hello LocalX WordPress (placeholder)';
"#,
        ),
    ],
);

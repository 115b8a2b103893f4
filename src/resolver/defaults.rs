//! Built-in lookup tables.
//!
//! These are merged with the user's `[packages]` and `[catalog]` settings when
//! a [`Classifier`](super::classify::Classifier) is constructed; they are never
//! mutated.

/// Runtime packages every consuming project already has.
pub const RUNTIME_PACKAGES: &[&str] = &["react", "react-dom", "next"];

/// Package-name patterns that are recorded as installable dependencies.
///
/// Anything else is dropped from the manifests unless the configuration adds
/// a pattern for it.
pub const ALLOWED_PACKAGE_PATTERNS: &[&str] = &[
    r"^@radix-ui/",
    r"^@hookform/",
    r"^@tanstack/",
    r"^class-variance-authority$",
    r"^clsx$",
    r"^cmdk$",
    r"^date-fns$",
    r"^embla-carousel-react$",
    r"^framer-motion$",
    r"^input-otp$",
    r"^lucide-react$",
    r"^motion$",
    r"^next-themes$",
    r"^react-day-picker$",
    r"^react-hook-form$",
    r"^react-resizable-panels$",
    r"^recharts$",
    r"^sonner$",
    r"^tailwind-merge$",
    r"^vaul$",
    r"^zod$",
];

/// Common external catalog components, as (JSX tag, catalog name).
///
/// Demo generation scans example code for these tags to catch catalog usage
/// that is not declared through imports.
pub const CATALOG_TAGS: &[(&str, &str)] = &[
    ("Accordion", "accordion"),
    ("Alert", "alert"),
    ("AlertDialog", "alert-dialog"),
    ("Avatar", "avatar"),
    ("Badge", "badge"),
    ("Button", "button"),
    ("Card", "card"),
    ("Checkbox", "checkbox"),
    ("Dialog", "dialog"),
    ("DropdownMenu", "dropdown-menu"),
    ("Input", "input"),
    ("InputOTP", "input-otp"),
    ("Label", "label"),
    ("Popover", "popover"),
    ("Select", "select"),
    ("Separator", "separator"),
    ("Skeleton", "skeleton"),
    ("Slider", "slider"),
    ("Switch", "switch"),
    ("Tabs", "tabs"),
    ("Textarea", "textarea"),
    ("Tooltip", "tooltip"),
];

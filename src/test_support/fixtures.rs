//! Test fixtures for common test scenarios.
//!
//! This module provides pre-built registry projects and a builder for
//! custom ones.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::util::config::{Config, CONFIG_FILE_NAME};

/// Configuration written by [`RegistryFixture::new`].
pub const DEFAULT_CONFIG: &str = r#"[registry]
name = "acme"
homepage = "https://acme.dev"
base_url = "https://acme.dev/r"
"#;

/// A registry project in a temporary directory.
///
/// The directory is removed when the fixture is dropped.
#[derive(Debug)]
pub struct RegistryFixture {
    dir: TempDir,
}

impl RegistryFixture {
    /// Create a project with [`DEFAULT_CONFIG`] and no sources.
    pub fn new() -> Self {
        Self::with_config(DEFAULT_CONFIG)
    }

    /// Create a project with the given `berth.toml` content.
    pub fn with_config(config: &str) -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), config)
            .expect("failed to write berth.toml");
        RegistryFixture { dir }
    }

    /// The card-input project: one UI component bundling two helpers, plus
    /// a documentation page with one preview example.
    pub fn card_input() -> Self {
        Self::new()
            .file("registry/ui/card-input.tsx", sources::CARD_INPUT)
            .file(
                "registry/lib/use-controllable-state.ts",
                sources::USE_CONTROLLABLE_STATE,
            )
            .file("registry/lib/utils.ts", sources::UTILS)
            .file("docs/card-input.mdx", docs::CARD_INPUT)
    }

    /// Write a file relative to the project root.
    pub fn file(self, rel_path: impl AsRef<Path>, content: &str) -> Self {
        let full_path = self.dir.path().join(rel_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create directory");
        }
        std::fs::write(&full_path, content).expect("failed to write fixture file");
        self
    }

    /// Project root.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join(CONFIG_FILE_NAME)
    }

    /// Load the project's configuration.
    pub fn config(&self) -> Config {
        Config::load(&self.config_path()).expect("fixture config is valid")
    }
}

impl Default for RegistryFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Component sources.
pub mod sources {
    pub const CARD_INPUT: &str = r#""use client"

import * as React from "react"
import { Card, CardContent } from "@/components/ui/card"
import { Input } from "@/components/ui/input"
import { useControllableState } from "@/lib/use-controllable-state"
import { cn } from "@/lib/utils"

export interface CardInputProps extends React.ComponentProps<"input"> {
  icon?: React.ReactNode
}

export function CardInput({ className, icon, value, onChange, ...props }: CardInputProps) {
  const [state, setState] = useControllableState(value, onChange)

  return (
    <Card className={cn("p-2", className)}>
      <CardContent className="flex items-center gap-2">
        {icon}
        <Input value={state} onChange={setState} {...props} />
      </CardContent>
    </Card>
  )
}
"#;

    pub const USE_CONTROLLABLE_STATE: &str = r#"import * as React from "react"

export function useControllableState<T>(value: T | undefined, onChange?: (value: T) => void) {
  const [inner, setInner] = React.useState(value)
  const state = value !== undefined ? value : inner
  const setState = React.useCallback(
    (next: T) => {
      setInner(next)
      onChange?.(next)
    },
    [onChange]
  )
  return [state, setState] as const
}
"#;

    pub const UTILS: &str = r#"import { clsx, type ClassValue } from "clsx"
import { twMerge } from "tailwind-merge"

export function cn(...inputs: ClassValue[]) {
  return twMerge(clsx(inputs))
}
"#;
}

/// Documentation pages.
pub mod docs {
    pub const CARD_INPUT: &str = r#"---
title: Card Input
description: An input that lives inside a card.
---

Wrap an input and an optional icon in a card.

```tsx preview name="basic"
import { Mail } from "lucide-react"

<CardInput placeholder="Email" icon={<Mail />} />
<Button>Subscribe</Button>
```
"#;
}

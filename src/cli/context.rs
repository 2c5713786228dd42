//! CLI context - bundles arguments, saved settings and output handling.

use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use copypasta::{ClipboardContext, ClipboardProvider};
use log::{debug, info};
use zeroize::Zeroize;

use passgen::pass::charset::strength_label;
use passgen::pass::output::{join_batch, write_batch};
use passgen::pass::{ComplexityTier, PasswordGenerator};
use passgen::rng::SecureRng;

use super::{CliArgs, Error, prompts};
use crate::settings::Settings;

const DEFAULT_OUTPUT_FILE: &str = "passwords.txt";

/// What to generate, after prompts and saved defaults are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub count: usize,
    pub length: usize,
    pub tier: ComplexityTier,
}

/// Application context for one CLI run.
pub struct Context {
    args: CliArgs,
    settings: Settings,
}

impl Context {
    pub fn new(args: CliArgs) -> Self {
        super::quiet::set(args.quiet);

        let settings = Settings::load_from_file().unwrap_or_else(|e| {
            prompts::warn(&format!("Failed to load settings: {}", e));
            Settings::default()
        });

        Self { args, settings }
    }

    pub fn run(&mut self) -> Result<(), Error> {
        let interactive = !self.args.has_explicit_args();
        let request = if interactive {
            debug!("no values on the command line, prompting");
            let stdin = io::stdin();
            self.prompt_request(&mut stdin.lock(), &mut io::stderr())?
        } else {
            self.flag_request()
        };
        debug!(
            "count={} length={} tier={}",
            request.count, request.length, request.tier
        );

        let rng = SecureRng::new(self.args.rng)?;
        debug!("random source: {}", rng.name());

        if self.args.entropy {
            let bits = request.tier.policy().entropy_bits(request.length);
            prompts::entropy(bits, strength_label(bits), rng.name());
        }

        let mut generator = PasswordGenerator::new(rng);
        let mut passwords =
            generator.generate_batch(request.count, request.length, request.tier)?;

        if self.args.save {
            self.save_defaults(request);
        }

        if interactive {
            prompts::generated_header();
        }
        let res = self.output(&passwords);
        passwords.zeroize();
        res
    }

    /// Fill anything not given on the command line from saved settings.
    pub fn flag_request(&self) -> Request {
        Request {
            count: self.args.number.unwrap_or(self.settings.number_of_passwords),
            length: self.args.length.unwrap_or(self.settings.pass_length),
            tier: self.args.tier.unwrap_or(self.settings.tier),
        }
    }

    /// Ask for count, length and tier in that order.
    pub fn prompt_request<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        out: &mut W,
    ) -> Result<Request, Error> {
        let count = prompts::ask_number(
            input,
            out,
            "Enter the number of passwords to generate",
            self.settings.number_of_passwords,
        )?;
        let length = prompts::ask_number(
            input,
            out,
            "Enter the desired password length",
            self.settings.pass_length,
        )?;
        let tier = prompts::ask_tier(input, out, self.settings.tier)?;
        Ok(Request {
            count,
            length,
            tier,
        })
    }

    fn save_defaults(&mut self, request: Request) {
        self.settings = Settings {
            number_of_passwords: request.count,
            pass_length: request.length,
            tier: request.tier,
        };
        match self.settings.save_to_file() {
            Ok(path) => {
                info!("saved defaults to {}", path.display());
                prompts::settings_saved(&path.display().to_string());
            }
            Err(e) => prompts::warn(&format!("Failed to save settings: {}", e)),
        }
    }

    fn output(&self, passwords: &[String]) -> Result<(), Error> {
        if self.args.clipboard && self.copy_to_clipboard(passwords)? {
            return Ok(());
        }

        if let Some(ref path) = self.args.output {
            let path = resolve_output_path(path);
            let file = open_output(&path)?;
            write_batch(file, passwords)?;

            let full_path = fs::canonicalize(&path).unwrap_or(path);
            info!("wrote {} password(s) to {}", passwords.len(), full_path.display());
            prompts::passwords_written(passwords.len(), &full_path.display().to_string());
            return Ok(());
        }

        let stdout = io::stdout();
        write_batch(stdout.lock(), passwords)?;
        Ok(())
    }

    /// Returns true when the batch was handled (copied, or the user aborted).
    fn copy_to_clipboard(&self, passwords: &[String]) -> Result<bool, Error> {
        let mut ctx = match ClipboardContext::new() {
            Ok(ctx) => ctx,
            Err(e) => {
                debug!("clipboard unavailable: {}", e);
                return Ok(!prompts::clipboard_fallback_prompt());
            }
        };

        // ownership moves to the clipboard backend, which cannot be wiped from here
        match ctx.set_contents(join_batch(passwords)) {
            Ok(()) => {
                prompts::clipboard_copied();
                Ok(true)
            }
            Err(e) => Err(Error::Clipboard(e.to_string())),
        }
    }
}

/// A directory (or a path ending in `/`) gets the default file name.
pub fn resolve_output_path(path: &Path) -> PathBuf {
    let raw = path.as_os_str().to_string_lossy();
    if raw.is_empty() || raw == "." || raw.ends_with('/') || path.is_dir() {
        path.join(DEFAULT_OUTPUT_FILE)
    } else {
        path.to_path_buf()
    }
}

fn open_output(path: &Path) -> io::Result<fs::File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

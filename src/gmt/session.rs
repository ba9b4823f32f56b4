// src/gmt/session.rs
//
// One plotting session per PostScript output. The session owns the shared
// -R region, the overlay chaining (-K/-O) and the temporary color table,
// which is removed on every exit path when the session drops.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::{Builder, NamedTempFile};

use crate::error::{Error, Result};
use crate::gmt::options::{
    BasemapOptions, ColorbarOptions, MakecptOptions, PsxyOptions, RasterOptions,
};
use crate::layout::PageSize;
use crate::range_scan::XyRange;

pub struct GmtSession {
    ps_file: PathBuf,
    region: String,
    page: PageSize,
    cpt: Option<NamedTempFile>,
    last_projection: Option<String>,
    overlay: bool,
}

impl GmtSession {
    /// Opens a session writing to `ps_file`. The file is created (or
    /// truncated) immediately so a bad output path fails before any GMT
    /// call runs.
    pub fn new(ps_file: &Path, region: &XyRange, page: PageSize) -> Result<Self> {
        File::create(ps_file)?;
        Ok(Self {
            ps_file: ps_file.to_path_buf(),
            region: region.to_string(),
            page,
            cpt: None,
            last_projection: None,
            overlay: false,
        })
    }

    pub fn ps_file(&self) -> &Path {
        &self.ps_file
    }

    /// Samples the named color table over the value range into a temporary
    /// .cpt file owned by the session.
    pub fn makecpt(&mut self, opts: &MakecptOptions) -> Result<()> {
        let stdout = run_gmt("makecpt", &opts.args())?;
        let mut cpt = Builder::new()
            .prefix("plot-scatter-")
            .suffix(".cpt")
            .tempfile()?;
        cpt.write_all(&stdout)?;
        cpt.flush()?;
        self.cpt = Some(cpt);
        Ok(())
    }

    fn cpt_path(&self) -> Result<&Path> {
        self.cpt
            .as_ref()
            .map(|f| f.path())
            .ok_or_else(|| Error::Configuration("no color table; call makecpt first".into()))
    }

    /// Draws one panel frame at its absolute page offset.
    pub fn psbasemap(&mut self, opts: &BasemapOptions) -> Result<()> {
        let args = opts.args();
        self.last_projection = Some(opts.projection.clone());
        self.overlay_call("psbasemap", &args, true)
    }

    /// Plots one data column of the binary input file into the current
    /// panel, colored through the session's color table.
    pub fn psxy(&mut self, opts: &PsxyOptions) -> Result<()> {
        let args = opts.args(self.cpt_path()?);
        self.overlay_call("psxy", &args, true)
    }

    /// Draws the colorbar against the page edge given by the mode.
    pub fn colorbar(&mut self, opts: &ColorbarOptions) -> Result<()> {
        let args = opts.args(self.page.width, self.page.height, self.cpt_path()?);
        // psscale places itself absolutely; no -R needed.
        self.overlay_call("psscale", &args, false)
    }

    /// Closes the PostScript file (writes the trailer) and returns its
    /// path. The temporary color table is removed when the session drops.
    pub fn finish(mut self) -> Result<PathBuf> {
        let projection = self
            .last_projection
            .take()
            .unwrap_or_else(|| "X100p".to_string());
        let mut full = vec![
            format!("-J{}", projection),
            "-T".to_string(),
            format!("-R{}", self.region),
        ];
        if self.overlay {
            full.push("-O".to_string());
        }
        let stdout = run_gmt("psxy", &full)?;
        self.append(&stdout)?;
        Ok(self.ps_file.clone())
    }

    /// Runs one PS-producing module and appends its output to the session
    /// file, maintaining the -K/-O overlay chain.
    fn overlay_call(&mut self, module: &str, args: &[String], with_region: bool) -> Result<()> {
        let mut full = args.to_vec();
        if with_region {
            full.push(format!("-R{}", self.region));
        }
        if self.overlay {
            full.push("-O".to_string());
        }
        full.push("-K".to_string());

        let stdout = run_gmt(module, &full)?;
        self.append(&stdout)?;
        self.overlay = true;
        Ok(())
    }

    fn append(&self, bytes: &[u8]) -> Result<()> {
        let mut file = OpenOptions::new().append(true).open(&self.ps_file)?;
        file.write_all(bytes)?;
        Ok(())
    }
}

/// Converts a finished PostScript file to the raster `out` with psconvert.
pub fn rasterize(ps_file: &Path, out: &Path, opts: &RasterOptions) -> Result<()> {
    let mut args = opts.args();
    args.push(format!("-F{}", out.with_extension("").display()));
    args.push(ps_file.display().to_string());
    run_gmt("psconvert", &args)?;
    Ok(())
}

fn run_gmt(module: &str, args: &[String]) -> Result<Vec<u8>> {
    let output = Command::new("gmt")
        .arg(module)
        .args(args)
        .output()
        .map_err(|e| Error::Toolkit {
            module: module.to_string(),
            stderr: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(Error::Toolkit {
            module: module.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(output.stdout)
}

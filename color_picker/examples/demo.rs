// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A terminal host for the color picker. It draws every surface with 24 bit background
//! colors, and feeds crossterm mouse events to the picker.
//!
//! ```text
//! cargo run --example demo -- --value "#1e90ff" --preset red --preset teal
//! ```
//!
//! Keys: `q` or `Esc` quits, `Tab` cycles the display scheme, `1`..`9` pick a preset,
//! `c` copies the display value. Click the display value to copy it too.

use std::{cell::RefCell,
          io::{Stdout, Write, stdout},
          path::PathBuf,
          rc::Rc};

use clap::Parser;
use crossterm::{cursor::{Hide, MoveTo, Show},
                event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream,
                        KeyCode, KeyEvent, KeyEventKind, MouseEventKind},
                execute, queue,
                style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
                terminal::{self, Clear, ClearType, EnterAlternateScreen,
                           LeaveAlternateScreen}};
use futures_util::StreamExt;
use miette::IntoDiagnostic;
use r3bl_color_picker::{ColorInput, ColorPicker, ColorPickerOptions, ColorPickerView, Hsv,
                        PickerSurface, PointerInput, SurfaceGeometry, SurfaceRect,
                        TracingConfig, TrueColor, ValueObject, hue_from_position, ok,
                        setup_default_miette_global_report_handler,
                        sleep_until_deadline, try_initialize_logging_global};
use tracing_core::LevelFilter;

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "demo")]
#[command(about = "🎨 Pick a color with your mouse, right in the terminal")]
#[command(version)]
#[command(next_line_help = true)]
pub struct CLIArg {
    #[arg(long, short = 'v', help = "Initial color: hex, CSS function, or CSS name.")]
    pub value: Option<String>,

    #[arg(long, help = "Hide the opacity strip, and drop alpha from every value.")]
    pub hide_opacity: bool,

    #[arg(long, help = "Milliseconds to wait before reporting a change.")]
    pub debounce_ms: Option<u64>,

    #[arg(long, short = 'p', help = "Preset swatch. Repeat for more than one.")]
    pub preset: Vec<String>,

    #[arg(long, short = 'c', help = "JSON options file. Flags override its values.")]
    pub config: Option<PathBuf>,

    #[arg(long, short = 'l', help = "Log debug output to this file.")]
    pub log_file: Option<String>,
}

impl CLIArg {
    fn try_into_options(self) -> miette::Result<ColorPickerOptions> {
        let mut options = match &self.config {
            Some(path) => ColorPickerOptions::try_from_json_file(path)?,
            None => ColorPickerOptions::default(),
        };
        if let Some(value) = self.value {
            options.value = Some(ColorInput::from(value));
        }
        if self.hide_opacity {
            options.hide_opacity_picker = true;
        }
        if let Some(debounce_ms) = self.debounce_ms {
            options.debounce_time_ms = debounce_ms;
        }
        options
            .predefined_colors
            .extend(self.preset.into_iter().map(ColorInput::from));
        Ok(options)
    }
}

/// Terminal cell layout. Everything is in columns and rows.
mod layout {
    pub const WIDTH: u16 = 48;
    pub const SATURATION_TOP: u16 = 2;
    pub const SATURATION_HEIGHT: u16 = 12;
    pub const DISPLAY_ROW: u16 = SATURATION_TOP + SATURATION_HEIGHT + 1;
    pub const DISPLAY_WIDTH: u16 = 30;
    pub const HUE_ROW: u16 = DISPLAY_ROW + 2;
    pub const OPACITY_ROW: u16 = HUE_ROW + 2;
    pub const PRESETS_ROW: u16 = OPACITY_ROW + 2;
    pub const SWATCH_WIDTH: u16 = 4;
    pub const FOOTER_ROW: u16 = PRESETS_ROW + 2;
    pub const STATUS_ROW: u16 = FOOTER_ROW + 2;
}

/// Cell rectangles use `cells - 1` as the extent, so that the last column (or row) maps
/// to exactly `1.0`.
#[derive(Debug, Clone, Copy)]
struct TerminalGeometry {
    has_opacity: bool,
}

impl SurfaceGeometry for TerminalGeometry {
    fn bounding_rect(&self, surface: PickerSurface) -> Option<SurfaceRect> {
        let last_column = f64::from(layout::WIDTH - 1);
        match surface {
            PickerSurface::Saturation => Some(SurfaceRect::new(
                0.0,
                f64::from(layout::SATURATION_TOP),
                last_column,
                f64::from(layout::SATURATION_HEIGHT - 1),
            )),
            PickerSurface::ColorDisplay => Some(SurfaceRect::new(
                0.0,
                f64::from(layout::DISPLAY_ROW),
                f64::from(layout::DISPLAY_WIDTH - 1),
                0.0,
            )),
            PickerSurface::Hue => Some(SurfaceRect::new(
                0.0,
                f64::from(layout::HUE_ROW),
                last_column,
                0.0,
            )),
            PickerSurface::Opacity => self.has_opacity.then(|| {
                SurfaceRect::new(0.0, f64::from(layout::OPACITY_ROW), last_column, 0.0)
            }),
        }
    }
}

/// Restores the terminal on every exit path, including panics.
struct RawModeGuard;

impl RawModeGuard {
    fn try_new(out: &mut Stdout) -> miette::Result<Self> {
        terminal::enable_raw_mode().into_diagnostic()?;
        execute!(out, EnterAlternateScreen, EnableMouseCapture, Hide).into_diagnostic()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // We don't care about the result of this operation.
        execute!(stdout(), Show, DisableMouseCapture, LeaveAlternateScreen).ok();
        terminal::disable_raw_mode().ok();
    }
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    setup_default_miette_global_report_handler(
        "https://github.com/r3bl-org/r3bl-open-core/issues/new",
    );

    let cli_arg = CLIArg::parse();

    if let Some(log_file) = &cli_arg.log_file {
        try_initialize_logging_global(TracingConfig::new_file(
            log_file.clone(),
            LevelFilter::DEBUG,
        ))?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    let options = cli_arg.try_into_options()?;
    let last_settled: Rc<RefCell<Option<ValueObject>>> = Rc::new(RefCell::new(None));
    let last_settled_clone = last_settled.clone();
    let mut picker = ColorPicker::builder(options)
        .with_on_change(move |value| {
            *last_settled_clone.borrow_mut() = Some(value.clone());
        })
        .build();

    run_event_loop(&mut picker, &last_settled).await?;

    // Deliver whatever is still pending, so nothing is lost on exit.
    if let Some(value) = picker.flush_pending_change() {
        println!("{}", value.hex);
    }

    tracing::debug!(message = "Stop logging...");

    ok!()
}

async fn run_event_loop(
    picker: &mut ColorPicker,
    last_settled: &Rc<RefCell<Option<ValueObject>>>,
) -> miette::Result<()> {
    let mut out = stdout();
    let _guard = RawModeGuard::try_new(&mut out)?;
    let mut event_stream = EventStream::new();

    render(&mut out, picker, last_settled)?;

    loop {
        let geometry = TerminalGeometry {
            has_opacity: picker.is_opacity_enabled(),
        };

        tokio::select! {
            maybe_event = event_stream.next() => {
                let Some(event) = maybe_event else { break };
                match event.into_diagnostic()? {
                    Event::Key(KeyEvent { code, kind: KeyEventKind::Press, .. }) => {
                        if !handle_key(picker, code) {
                            break;
                        }
                    }
                    Event::Mouse(mouse_event) => {
                        let is_footer_click = matches!(mouse_event.kind, MouseEventKind::Down(_))
                            && mouse_event.row == layout::FOOTER_ROW;
                        if is_footer_click {
                            picker.cycle_display_scheme();
                        } else if let Some(index) = swatch_under(mouse_event.column, mouse_event.row, &mouse_event.kind) {
                            picker.handle_predefined_color_click(index);
                        } else {
                            picker.handle_pointer_input(PointerInput::from(mouse_event), &geometry);
                        }
                    }
                    _ => {}
                }
            }
            () = sleep_until_deadline(picker.next_change_deadline()) => {
                picker.poll_change();
            }
        }

        render(&mut out, picker, last_settled)?;
    }

    ok!()
}

/// Returns `false` to quit.
fn handle_key(picker: &mut ColorPicker, code: KeyCode) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => return false,
        KeyCode::Tab => {
            picker.cycle_display_scheme();
        }
        KeyCode::Char('c') => {
            let input = PointerInput::new(
                0.0,
                f64::from(layout::DISPLAY_ROW),
                r3bl_color_picker::PointerInputKind::Other,
            );
            picker.handle_color_display_click(input);
        }
        KeyCode::Char(digit @ '1'..='9') => {
            if let Some(number) = digit.to_digit(10).and_then(|it| usize::try_from(it).ok()) {
                picker.handle_predefined_color_click(number - 1);
            }
        }
        _ => {}
    }
    true
}

fn swatch_under(column: u16, row: u16, kind: &MouseEventKind) -> Option<usize> {
    (matches!(kind, MouseEventKind::Down(_)) && row == layout::PRESETS_ROW)
        .then(|| usize::from(column / layout::SWATCH_WIDTH))
}

fn to_terminal_color(color: TrueColor) -> Color {
    let it = color.to_rgba();
    Color::Rgb {
        r: it.r,
        g: it.g,
        b: it.b,
    }
}

/// Composites `color` over a two tone checkerboard, since terminals have no alpha.
fn over_checkerboard(color: TrueColor, column: u16) -> Color {
    let checker = if column % 2 == 0 { 0.8 } else { 0.6 };
    let blend = |channel: f64| channel * color.a + checker * (1.0 - color.a);
    to_terminal_color(TrueColor {
        r: blend(color.r),
        g: blend(color.g),
        b: blend(color.b),
        a: 1.0,
    })
}

fn render(
    out: &mut Stdout,
    picker: &ColorPicker,
    last_settled: &Rc<RefCell<Option<ValueObject>>>,
) -> miette::Result<()> {
    let view: ColorPickerView = picker.render();
    let hue = picker.hue();
    let width = layout::WIDTH;

    queue!(out, ResetColor, Clear(ClearType::All), MoveTo(0, 0)).into_diagnostic()?;
    queue!(out, Print("🎨 r3bl color picker. q to quit, Tab to cycle format.")).into_diagnostic()?;

    // Saturation / value plane.
    let pointer = view.saturation.pointer;
    let pointer_cell = (
        (pointer.x * f64::from(width - 1)).round(),
        (pointer.y * f64::from(layout::SATURATION_HEIGHT - 1)).round(),
    );
    for row in 0..layout::SATURATION_HEIGHT {
        queue!(out, MoveTo(0, layout::SATURATION_TOP + row)).into_diagnostic()?;
        for column in 0..width {
            let color = TrueColor::from_hsv(
                Hsv {
                    h: hue,
                    s: f64::from(column) / f64::from(width - 1),
                    v: 1.0 - f64::from(row) / f64::from(layout::SATURATION_HEIGHT - 1),
                },
                1.0,
            );
            let is_pointer = (f64::from(column), f64::from(row)) == pointer_cell;
            queue!(
                out,
                SetBackgroundColor(to_terminal_color(color)),
                SetForegroundColor(Color::White),
                Print(if is_pointer { "◯" } else { " " })
            )
            .into_diagnostic()?;
        }
    }

    // Color display.
    queue!(
        out,
        ResetColor,
        MoveTo(0, layout::DISPLAY_ROW),
        Print(format!("📋 {}", view.saturation.display_value))
    )
    .into_diagnostic()?;

    // Hue strip.
    let hue_pointer_column = (view.hue.pointer_left_percent / 100.0 * f64::from(width - 1)).round();
    queue!(out, MoveTo(0, layout::HUE_ROW)).into_diagnostic()?;
    for column in 0..width {
        let cell_hue = hue_from_position(f64::from(column) / f64::from(width - 1));
        let color = TrueColor::from_hsv(Hsv { h: cell_hue, s: 1.0, v: 1.0 }, 1.0);
        let is_pointer = f64::from(column) == hue_pointer_column;
        queue!(
            out,
            SetBackgroundColor(to_terminal_color(color)),
            SetForegroundColor(Color::Black),
            Print(if is_pointer { "┃" } else { " " })
        )
        .into_diagnostic()?;
    }

    // Opacity strip.
    if let Some(opacity) = &view.maybe_opacity {
        let opacity_pointer_column = (opacity.pointer_left_percent / 100.0 * f64::from(width - 1)).round();
        queue!(out, MoveTo(0, layout::OPACITY_ROW)).into_diagnostic()?;
        for column in 0..width {
            let alpha = f64::from(column) / f64::from(width - 1);
            let color = TrueColor::from_hsv(Hsv { h: hue, s: 1.0, v: 1.0 }, alpha);
            let is_pointer = f64::from(column) == opacity_pointer_column;
            queue!(
                out,
                SetBackgroundColor(over_checkerboard(color, column)),
                SetForegroundColor(Color::Black),
                Print(if is_pointer { "┃" } else { " " })
            )
            .into_diagnostic()?;
        }
    }

    // Presets.
    queue!(out, ResetColor, MoveTo(0, layout::PRESETS_ROW)).into_diagnostic()?;
    if let Some(presets) = &view.maybe_predefined_colors {
        for swatch in &presets.swatches {
            let color = swatch.value.to_true_color();
            queue!(
                out,
                SetBackgroundColor(over_checkerboard(color, 0)),
                Print("   "),
                ResetColor,
                Print(" ")
            )
            .into_diagnostic()?;
        }
    }

    // Footer.
    queue!(out, ResetColor, MoveTo(0, layout::FOOTER_ROW)).into_diagnostic()?;
    for item in &view.footer.items {
        let foreground = if item.is_active { Color::Yellow } else { Color::DarkGrey };
        queue!(out, SetForegroundColor(foreground), Print(item.title)).into_diagnostic()?;
        if item.has_separator {
            queue!(out, SetForegroundColor(Color::DarkGrey), Print(" / ")).into_diagnostic()?;
        }
    }

    // Last value delivered to on_change.
    let status = match last_settled.borrow().as_ref() {
        Some(value) => format!(
            "onChange: {} rgb({}, {}, {}, {}) hsl({}, {}%, {}%)",
            value.hex, value.rgb.r, value.rgb.g, value.rgb.b, value.rgb.a, value.hsl.h,
            value.hsl.s, value.hsl.l
        ),
        None => "onChange: (waiting)".to_string(),
    };
    queue!(
        out,
        ResetColor,
        MoveTo(0, layout::STATUS_ROW),
        Print(status)
    )
    .into_diagnostic()?;

    out.flush().into_diagnostic()
}

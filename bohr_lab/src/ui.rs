//! Slider controls, chart titles, and the model-comparison sidebar

use crate::renderer::ChartRect;
use crate::state::{QuantumState, L_MAX, N_MAX, N_MIN};
use egui::{Align2, Color32, Context, FontFamily, FontId, RichText};

/// Equation entry with label and formula
pub struct Equation {
    pub name: &'static str,
    pub formula: &'static str,
    pub description: &'static str,
}

pub const COMPARISON_EQUATIONS: &[Equation] = &[
    Equation {
        name: "Bohr Orbit Radius",
        formula: "rₙ = n²a₀",
        description: "One allowed radius per energy level",
    },
    Equation {
        name: "Radial Probability",
        formula: "P(r) = r²|Rₙₗ(r)|²",
        description: "Chance of finding the electron at radius r",
    },
    Equation {
        name: "Angular Weight",
        formula: "P(θ) ∝ |Θₗ(cos θ)|²",
        description: "Orbital shape factor",
    },
    Equation {
        name: "Radial Nodes",
        formula: "N = n − l − 1",
        description: "Zero crossings of the radial density",
    },
];

pub const COMPARISON_VARIABLES: &[(&str, &str)] = &[
    ("n", "Principal quantum number"),
    ("l", "Orbital angular momentum"),
    ("a₀", "Bohr radius"),
    ("Rₙₗ", "Radial wavefunction"),
    ("θ", "Polar angle"),
];

/// Draw the slider window anchored bottom-right.
///
/// Returns true when either slider moved. The raw slider values are kept by
/// the caller; the controller clamps l to n - 1 on its own.
pub fn draw_controls(ctx: &Context, n: &mut u32, l: &mut u32, state: QuantumState) -> bool {
    let mut changed = false;

    egui::Window::new("Controls")
        .anchor(Align2::RIGHT_BOTTOM, [-20.0, -20.0])
        .resizable(false)
        .collapsible(false)
        .show(ctx, |ui| {
            ui.label(format!("Energy Level (n): {}", state.n()));
            changed |= ui.add(egui::Slider::new(n, N_MIN..=N_MAX)).changed();

            ui.add_space(8.0);

            ui.label(format!("Orbital Shape (l): {}", state.subshell_name()));
            changed |= ui.add(egui::Slider::new(l, 0..=L_MAX)).changed();
        });

    changed
}

/// Status strip across the top with the current state summary
pub fn draw_status_bar(ctx: &Context, state: QuantumState, cloud_points: usize, target: usize) {
    egui::TopBottomPanel::top("status").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let letter = &state.subshell_name()[..1];
            ui.label(format!("State: {}{}", state.n(), letter));
            ui.separator();
            ui.label(format!("Radial nodes: {}", state.radial_nodes()));
            ui.separator();
            ui.label(format!("Cloud points: {cloud_points}"));
            if cloud_points < target {
                ui.label(
                    RichText::new("PARTIAL CLOUD").color(Color32::YELLOW),
                );
            }
        });
    });
}

/// Titles floating above the two chart frames
pub fn draw_chart_titles(ctx: &Context, bohr: ChartRect, quantum: ChartRect, nodes: u32) {
    chart_title(
        ctx,
        "bohr_title",
        bohr,
        "Bohr Model (Single Peak)",
        Color32::from_rgb(255, 80, 80),
    );
    chart_title(
        ctx,
        "quantum_title",
        quantum,
        &format!("Quantum Model (Radial Nodes: {nodes})"),
        Color32::from_rgb(100, 150, 255),
    );
}

fn chart_title(ctx: &Context, id: &str, rect: ChartRect, text: &str, color: Color32) {
    egui::Area::new(egui::Id::new(id))
        .fixed_pos([rect.x, rect.y - 26.0])
        .show(ctx, |ui| {
            ui.label(RichText::new(text).color(color).strong());
        });
}

/// Collapsible window listing the formulas behind both models
pub fn draw_comparison_window(ctx: &Context) {
    egui::Window::new("Model Comparison")
        .anchor(Align2::LEFT_TOP, [20.0, 40.0])
        .resizable(false)
        .default_open(false)
        .show(ctx, |ui| {
            ui.label(
                RichText::new("Equations")
                    .strong()
                    .color(Color32::from_rgb(255, 200, 100)),
            );
            ui.add_space(5.0);

            for eq in COMPARISON_EQUATIONS {
                draw_equation(ui, eq);
                ui.add_space(6.0);
            }

            ui.separator();
            ui.label(
                RichText::new("Variables")
                    .strong()
                    .color(Color32::from_rgb(255, 200, 100)),
            );
            ui.add_space(5.0);

            for (symbol, meaning) in COMPARISON_VARIABLES {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(*symbol)
                            .color(Color32::from_rgb(150, 255, 150))
                            .font(FontId::new(14.0, FontFamily::Monospace)),
                    );
                    ui.label(RichText::new("=").color(Color32::GRAY));
                    ui.label(RichText::new(*meaning).color(Color32::LIGHT_GRAY));
                });
            }
        });
}

fn draw_equation(ui: &mut egui::Ui, eq: &Equation) {
    ui.group(|ui| {
        ui.label(RichText::new(eq.name).strong().color(Color32::WHITE));
        ui.label(
            RichText::new(eq.formula)
                .font(FontId::new(15.0, FontFamily::Monospace))
                .color(Color32::from_rgb(200, 220, 255)),
        );
        ui.label(RichText::new(eq.description).small().color(Color32::GRAY));
    });
}

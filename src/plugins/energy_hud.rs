//! Energy HUD (Heads-Up Display) module.
//!
//! Overlays the energy monitor's readings in the top-left corner of the
//! window, refreshed every frame:
//!
//! - **kinetic**: kinetic energy, 4 decimals
//! - **potential**: potential energy relative to the pivot, 4 decimals
//! - **total energy**: their sum, 6 decimals
//! - **drift**: |E - E₀| since the last (re)start
//!
//! The HUD is toggled with [`SimulationCommand::ToggleEnergyHud`].

use crate::plugins::simulation::SimulationSet;
use crate::prelude::*;

#[derive(Component, Copy, Clone, Default, PartialEq, Debug)]
struct EnergyHud;

#[derive(Component, Copy, Clone, Default, PartialEq, Debug)]
struct KineticEnergyTextNode;

#[derive(Component, Copy, Clone, Default, PartialEq, Debug)]
struct PotentialEnergyTextNode;

#[derive(Component, Copy, Clone, Default, PartialEq, Debug)]
struct TotalEnergyTextNode;

#[derive(Component, Copy, Clone, Default, PartialEq, Debug)]
struct EnergyDriftTextNode;

#[derive(Resource, Reflect, Debug, Clone, PartialEq)]
#[reflect(Resource, Debug)]
pub struct EnergyHudSettings {
    pub enabled: bool,
    pub font_size: f32,
}

impl Default for EnergyHudSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            font_size: 14.0,
        }
    }
}

impl From<&UiConfig> for EnergyHudSettings {
    fn from(config: &UiConfig) -> Self {
        Self {
            enabled: config.hud_enabled,
            font_size: config.font_size,
        }
    }
}

fn format_kinetic(energy: &MechanicalEnergy) -> String {
    format!("{:.4}", energy.kinetic)
}

fn format_potential(energy: &MechanicalEnergy) -> String {
    format!("{:.4}", energy.potential)
}

fn format_total(energy: &MechanicalEnergy) -> String {
    format!("{:.6}", energy.total)
}

fn format_drift(drift: Scalar) -> String {
    format!("{drift:.2e}")
}

pub struct EnergyHudPlugin;

impl EnergyHudPlugin {
    fn spawn_energy_hud(mut commands: Commands, settings: Res<EnergyHudSettings>) {
        let text_font = TextFont::from_font_size(settings.font_size);
        let text_color = TextColor(Color::BLACK);

        let hud_node = Node {
            position_type: PositionType::Absolute,
            top: Val::Px(5.0),
            left: Val::Px(5.0),
            padding: UiRect::all(Val::Px(5.0)),
            display: if settings.enabled {
                Display::Flex
            } else {
                Display::None
            },
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(1.0),
            ..default()
        };
        let hud_row_node = Node {
            display: Display::Flex,
            justify_content: JustifyContent::SpaceBetween,
            column_gap: Val::Px(20.0),
            ..default()
        };

        commands.spawn((
            Name::new("Energy HUD"),
            EnergyHud,
            hud_node,
            BorderRadius::all(Val::Px(5.0)),
            BackgroundColor(Color::srgba(1.0, 1.0, 1.0, 0.6)),
            children![
                (
                    hud_row_node.clone(),
                    children![
                        (Text::new("kinetic"), text_font.clone(), text_color),
                        (
                            KineticEnergyTextNode,
                            Text::new("-"),
                            text_font.clone(),
                            text_color
                        ),
                    ],
                ),
                (
                    hud_row_node.clone(),
                    children![
                        (Text::new("potential"), text_font.clone(), text_color),
                        (
                            PotentialEnergyTextNode,
                            Text::new("-"),
                            text_font.clone(),
                            text_color
                        ),
                    ],
                ),
                (
                    hud_row_node.clone(),
                    children![
                        (Text::new("total energy"), text_font.clone(), text_color),
                        (
                            TotalEnergyTextNode,
                            Text::new("-"),
                            text_font.clone(),
                            text_color
                        ),
                    ],
                ),
                (
                    hud_row_node.clone(),
                    children![
                        (Text::new("drift"), text_font.clone(), text_color),
                        (
                            EnergyDriftTextNode,
                            Text::new("-"),
                            text_font.clone(),
                            text_color
                        ),
                    ],
                ),
            ],
        ));
    }

    fn handle_toggle_command(
        mut commands_reader: EventReader<SimulationCommand>,
        mut settings: ResMut<EnergyHudSettings>,
        mut hud_node: Single<&mut Node, With<EnergyHud>>,
    ) {
        for command in commands_reader.read() {
            if !matches!(command, SimulationCommand::ToggleEnergyHud) {
                continue;
            }
            settings.enabled = !settings.enabled;
            hud_node.display = if settings.enabled {
                Display::Flex
            } else {
                Display::None
            };
            info!(
                "Energy HUD {}",
                if settings.enabled {
                    "enabled"
                } else {
                    "disabled"
                }
            );
        }
    }

    fn update_energy_text(
        settings: Res<EnergyHudSettings>,
        current_energy: Res<CurrentEnergy>,
        initial_energy: Res<InitialEnergy>,
        mut kinetic_text: Single<
            &mut Text,
            (
                With<KineticEnergyTextNode>,
                Without<PotentialEnergyTextNode>,
                Without<TotalEnergyTextNode>,
                Without<EnergyDriftTextNode>,
            ),
        >,
        mut potential_text: Single<
            &mut Text,
            (
                With<PotentialEnergyTextNode>,
                Without<TotalEnergyTextNode>,
                Without<EnergyDriftTextNode>,
            ),
        >,
        mut total_text: Single<
            &mut Text,
            (With<TotalEnergyTextNode>, Without<EnergyDriftTextNode>),
        >,
        mut drift_text: Single<&mut Text, With<EnergyDriftTextNode>>,
    ) {
        if !settings.enabled {
            return;
        }

        ***kinetic_text = format_kinetic(&current_energy);
        ***potential_text = format_potential(&current_energy);
        ***total_text = format_total(&current_energy);
        ***drift_text = format_drift(current_energy.drift_from(&initial_energy));
    }
}

impl Plugin for EnergyHudPlugin {
    fn build(&self, app: &mut App) {
        let settings = app
            .world()
            .get_resource::<SimulationConfig>()
            .map(|config| EnergyHudSettings::from(&config.ui))
            .unwrap_or_default();

        app.register_type::<EnergyHudSettings>();
        app.insert_resource(settings);
        app.add_systems(Startup, Self::spawn_energy_hud);
        app.add_systems(
            Update,
            (Self::handle_toggle_command, Self::update_energy_text)
                .chain()
                .in_set(SimulationSet::UI),
        );
    }
}

//! English translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // Units
    t.insert("unit.kilowatt_hours".into(), "kWh".into());
    t.insert("unit.per_kwh".into(), "/kWh".into());
    t.insert("unit.per_day".into(), "/day".into());
    t.insert("unit.per_month".into(), "/month".into());

    // Months
    t.insert("month.1".into(), "January".into());
    t.insert("month.2".into(), "February".into());
    t.insert("month.3".into(), "March".into());
    t.insert("month.4".into(), "April".into());
    t.insert("month.5".into(), "May".into());
    t.insert("month.6".into(), "June".into());
    t.insert("month.7".into(), "July".into());
    t.insert("month.8".into(), "August".into());
    t.insert("month.9".into(), "September".into());
    t.insert("month.10".into(), "October".into());
    t.insert("month.11".into(), "November".into());
    t.insert("month.12".into(), "December".into());

    // Tariffs
    t.insert("tariff.default_name".into(), "Standard".into());
    t.insert("tariff.kind.peak".into(), "Peak".into());
    t.insert("tariff.kind.night".into(), "Night".into());
    t.insert("tariff.kind.shoulder".into(), "Shoulder".into());
    t.insert("tariff.kind.flat".into(), "Flat".into());
    t.insert("tariff.kind.other".into(), "Other".into());

    // Priorities
    t.insert("priority.high".into(), "High".into());
    t.insert("priority.medium".into(), "Medium".into());
    t.insert("priority.low".into(), "Low".into());

    // Report
    t.insert("report.title".into(), "Household energy report".into());
    t.insert("report.date".into(), "Date".into());
    t.insert("report.summary".into(), "Summary".into());
    t.insert("report.appliances".into(), "Appliances".into());
    t.insert("report.groups".into(), "Groups".into());
    t.insert("report.daily_consumption".into(), "Daily consumption".into());
    t.insert("report.monthly_consumption".into(), "Monthly consumption".into());
    t.insert("report.daily_cost".into(), "Daily cost".into());
    t.insert("report.monthly_cost".into(), "Monthly cost".into());
    t.insert("report.average_rate".into(), "Average rate".into());
    t.insert("report.current_tariff".into(), "Current tariff".into());
    t.insert("report.current_month".into(), "This month so far".into());
    t.insert("report.comparison".into(), "Change vs previous month".into());
    t.insert("report.top_consumers".into(), "Top consumers".into());
    t.insert("report.forecast".into(), "Forecast".into());
    t.insert("report.projected_month".into(), "Projected this month".into());
    t.insert("report.projected_year".into(), "Projected this year".into());
    t.insert("report.remaining_days".into(), "Days remaining".into());
    t.insert("report.monthly_history".into(), "Monthly history".into());
    t.insert("report.recommendations".into(), "Recommendations".into());
    t.insert("report.no_data".into(), "No data".into());

    // CSV export
    t.insert("export.header.date".into(), "Date".into());
    t.insert("export.header.appliance".into(), "Appliance".into());
    t.insert("export.header.consumption".into(), "Consumption (kWh)".into());
    t.insert("export.header.cost".into(), "Cost".into());
    t.insert("export.header.tariff".into(), "Tariff".into());
    t.insert("export.header.usage_hours".into(), "Usage hours".into());
    t.insert("export.general".into(), "General".into());

    // Generated recommendations
    t.insert("recommendation.high_consumption.title".into(), "High consumption".into());
    t.insert(
        "recommendation.high_consumption.message".into(),
        "Appliance \"{name}\" uses {kwh} kWh per day. Consider reducing its usage time.".into(),
    );
    t.insert("recommendation.tariff.title".into(), "Night tariff".into());
    t.insert(
        "recommendation.tariff.message".into(),
        "Run energy-intensive appliances (washing machine, dishwasher) at night ({start}:00 - {end}:00). Savings: {savings} per kWh".into(),
    );

    // General tips
    t.insert("tip.lighting.title".into(), "Lighting".into());
    t.insert(
        "tip.lighting.message".into(),
        "Replace incandescent bulbs with LED. This saves up to 80% of lighting energy. A 10 W LED bulb gives as much light as a 75 W incandescent one.".into(),
    );
    t.insert("tip.standby.title".into(), "Standby mode".into());
    t.insert(
        "tip.standby.message".into(),
        "Unplug appliances you are not using. Standby can account for up to 10% of total consumption. Use power strips with a switch.".into(),
    );
    t.insert("tip.refrigerator.title".into(), "Refrigerator".into());
    t.insert(
        "tip.refrigerator.message".into(),
        "Keep the refrigerator away from the stove and radiators. Defrost it regularly if it has no No Frost system. Hot food in the refrigerator raises its consumption by 20%.".into(),
    );
    t.insert("tip.washing.title".into(), "Washing machine".into());
    t.insert(
        "tip.washing.message".into(),
        "Wash full loads only. A 30-40\u{00B0}C programme instead of 60\u{00B0}C saves up to 50% of the energy. Run the washing at night on the reduced tariff.".into(),
    );
    t.insert("tip.kettle.title".into(), "Electric kettle".into());
    t.insert(
        "tip.kettle.message".into(),
        "Boil only the water you need. Descale the kettle regularly: limescale raises consumption by 15-20%. Consider a thermo pot for frequent use.".into(),
    );
    t.insert("tip.air_conditioning.title".into(), "Air conditioning".into());
    t.insert(
        "tip.air_conditioning.message".into(),
        "Set the temperature no lower than 24\u{00B0}C in summer. Every degree lower adds 5-8% to consumption. Clean the filters regularly. Keep windows and doors closed while it runs.".into(),
    );
    t.insert("tip.daylight.title".into(), "Natural light".into());
    t.insert(
        "tip.daylight.message".into(),
        "Make the most of daylight. Keep windows clean, use light curtains and do not block windows with furniture.".into(),
    );
    t.insert("tip.heaters.title".into(), "Electric heaters".into());
    t.insert(
        "tip.heaters.message".into(),
        "Heaters are among the most energy-hungry appliances. Insulate windows and doors. Heat only one room and switch the heater off when you leave.".into(),
    );
    t.insert("tip.computer.title".into(), "Computers and laptops".into());
    t.insert(
        "tip.computer.message".into(),
        "Use power saving mode. Turn the monitor off during breaks longer than 10 minutes. A laptop uses 3-4 times less than a desktop. Unplug the charger once the battery is full.".into(),
    );
    t.insert("tip.iron.title".into(), "Iron".into());
    t.insert(
        "tip.iron.message".into(),
        "Iron a large batch at once. Start with fabrics that need a low temperature. Switch the iron off 5-10 minutes before the end: the residual heat is enough for light fabrics.".into(),
    );
    t.insert("tip.dishwasher.title".into(), "Dishwasher".into());
    t.insert(
        "tip.dishwasher.message".into(),
        "Run it only when full. Use the eco programme. Skip the drying cycle: open the door and let the dishes dry naturally.".into(),
    );
    t.insert("tip.television.title".into(), "Television".into());
    t.insert(
        "tip.television.message".into(),
        "Lower the screen brightness, factory settings are often too high. Use the sleep timer. Switch the TV off completely instead of leaving it on standby.".into(),
    );
    t.insert("tip.efficiency_class.title".into(), "Energy efficiency class".into());
    t.insert(
        "tip.efficiency_class.message".into(),
        "When buying new appliances choose class A++ or A+++. Consumption between classes A and D can differ by 50%. The difference pays off within 2-3 years.".into(),
    );

    // Appliance tips
    t.insert("appliance_tip.prefix.advice".into(), "Tip: ".into());
    t.insert("appliance_tip.prefix.warning".into(), "Warning: ".into());
    t.insert(
        "appliance_tip.refrigerator".into(),
        "Keep the refrigerator away from the stove and radiators. Defrost regularly. Hot food raises consumption by 20%.".into(),
    );
    t.insert(
        "appliance_tip.kettle".into(),
        "Boil only the water you need. Descale the kettle: limescale raises consumption by 15-20%.".into(),
    );
    t.insert(
        "appliance_tip.washing_machine".into(),
        "Wash full loads. 30-40\u{00B0}C instead of 60\u{00B0}C saves up to 50% of the energy. Wash at night on the reduced tariff.".into(),
    );
    t.insert(
        "appliance_tip.air_conditioner".into(),
        "Keep it at 24\u{00B0}C or above. Every degree lower adds 5-8%. Clean the filters. Close windows while it runs.".into(),
    );
    t.insert(
        "appliance_tip.heater".into(),
        "Heaters use a lot of energy! Insulate windows and doors. Heat only one room. Switch off when you leave.".into(),
    );
    t.insert(
        "appliance_tip.television".into(),
        "Lower the screen brightness. Use the sleep timer. Switch it off completely instead of standby.".into(),
    );
    t.insert(
        "appliance_tip.computer".into(),
        "Use power saving mode. Turn the monitor off during breaks longer than 10 minutes.".into(),
    );
    t.insert(
        "appliance_tip.laptop".into(),
        "Unplug the charger once the battery is full. Use power saving mode.".into(),
    );
    t.insert(
        "appliance_tip.iron".into(),
        "Iron a large batch at once. Switch off 5-10 minutes before the end: the residual heat is enough for light fabrics.".into(),
    );
    t.insert(
        "appliance_tip.dishwasher".into(),
        "Run it when full. Use the eco programme. Skip drying and let the dishes dry naturally.".into(),
    );
    t.insert(
        "appliance_tip.microwave".into(),
        "Defrost food in advance in the refrigerator, not in the microwave. Cover food with a lid to heat it faster.".into(),
    );
    t.insert(
        "appliance_tip.water_heater".into(),
        "A water heater is one of the biggest consumers! Set it to 55-60\u{00B0}C. Switch it off when you are away for long.".into(),
    );
    t.insert(
        "appliance_tip.hair_dryer".into(),
        "Towel-dry your hair first. Use the medium temperature setting: it is gentler and cheaper.".into(),
    );
    t.insert(
        "appliance_tip.lighting".into(),
        "If this is not LED, replace it! LED saves up to 80% of the energy. Switch the light off when leaving the room.".into(),
    );
    t.insert(
        "appliance_tip.stove".into(),
        "Use cookware that matches the burner size. Cover pans with a lid. Switch off 5-10 minutes before the dish is ready.".into(),
    );
    t.insert(
        "appliance_tip.very_high".into(),
        "This appliance uses more than {kwh} kWh per day! That is a significant load. Look for ways to reduce its usage time.".into(),
    );
    t.insert(
        "appliance_tip.high".into(),
        "This appliance uses more than {kwh} kWh per day. Try to run it at night on the reduced tariff.".into(),
    );

    t
}

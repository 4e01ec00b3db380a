//! Russian translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // Units
    t.insert("unit.kilowatt_hours".into(), "кВт·ч".into());
    t.insert("unit.per_kwh".into(), "/кВт·ч".into());
    t.insert("unit.per_day".into(), "/день".into());
    t.insert("unit.per_month".into(), "/месяц".into());

    // Months
    t.insert("month.1".into(), "Январь".into());
    t.insert("month.2".into(), "Февраль".into());
    t.insert("month.3".into(), "Март".into());
    t.insert("month.4".into(), "Апрель".into());
    t.insert("month.5".into(), "Май".into());
    t.insert("month.6".into(), "Июнь".into());
    t.insert("month.7".into(), "Июль".into());
    t.insert("month.8".into(), "Август".into());
    t.insert("month.9".into(), "Сентябрь".into());
    t.insert("month.10".into(), "Октябрь".into());
    t.insert("month.11".into(), "Ноябрь".into());
    t.insert("month.12".into(), "Декабрь".into());

    // Tariffs
    t.insert("tariff.default_name".into(), "Стандартный".into());
    t.insert("tariff.kind.peak".into(), "Пиковый".into());
    t.insert("tariff.kind.night".into(), "Ночной".into());
    t.insert("tariff.kind.shoulder".into(), "Полупиковый".into());
    t.insert("tariff.kind.flat".into(), "Одноставочный".into());
    t.insert("tariff.kind.other".into(), "Другой".into());

    // Priorities
    t.insert("priority.high".into(), "Высокий".into());
    t.insert("priority.medium".into(), "Средний".into());
    t.insert("priority.low".into(), "Низкий".into());

    // Report
    t.insert("report.title".into(), "Отчёт об энергопотреблении".into());
    t.insert("report.date".into(), "Дата".into());
    t.insert("report.summary".into(), "Сводка".into());
    t.insert("report.appliances".into(), "Приборы".into());
    t.insert("report.groups".into(), "Группы".into());
    t.insert("report.daily_consumption".into(), "Потребление в день".into());
    t.insert("report.monthly_consumption".into(), "Потребление в месяц".into());
    t.insert("report.daily_cost".into(), "Стоимость в день".into());
    t.insert("report.monthly_cost".into(), "Стоимость в месяц".into());
    t.insert("report.average_rate".into(), "Средний тариф".into());
    t.insert("report.current_tariff".into(), "Текущий тариф".into());
    t.insert("report.current_month".into(), "С начала месяца".into());
    t.insert("report.comparison".into(), "Изменение к прошлому месяцу".into());
    t.insert("report.top_consumers".into(), "Главные потребители".into());
    t.insert("report.forecast".into(), "Прогноз".into());
    t.insert("report.projected_month".into(), "Прогноз на месяц".into());
    t.insert("report.projected_year".into(), "Прогноз на год".into());
    t.insert("report.remaining_days".into(), "Осталось дней".into());
    t.insert("report.monthly_history".into(), "История по месяцам".into());
    t.insert("report.recommendations".into(), "Рекомендации".into());
    t.insert("report.no_data".into(), "Нет данных".into());

    // CSV export
    t.insert("export.header.date".into(), "Дата".into());
    t.insert("export.header.appliance".into(), "Прибор".into());
    t.insert("export.header.consumption".into(), "Потребление (кВт·ч)".into());
    t.insert("export.header.cost".into(), "Стоимость (руб.)".into());
    t.insert("export.header.tariff".into(), "Тариф".into());
    t.insert("export.header.usage_hours".into(), "Часы работы".into());
    t.insert("export.general".into(), "Общее".into());

    // Generated recommendations
    t.insert("recommendation.high_consumption.title".into(), "Высокое потребление".into());
    t.insert(
        "recommendation.high_consumption.message".into(),
        "Прибор \"{name}\" потребляет {kwh} кВт·ч в день. Рассмотрите возможность сокращения времени использования.".into(),
    );
    t.insert("recommendation.tariff.title".into(), "Ночной тариф".into());
    t.insert(
        "recommendation.tariff.message".into(),
        "Используйте энергоёмкие приборы (стиральная машина, посудомойка) в ночное время ({start}:00 - {end}:00). Экономия: {savings} руб./кВт·ч".into(),
    );

    // General tips
    t.insert("tip.lighting.title".into(), "Освещение".into());
    t.insert(
        "tip.lighting.message".into(),
        "Замените лампы накаливания на LED. Экономия до 80% электроэнергии на освещение. LED-лампа 10 Вт даёт столько же света, сколько лампа накаливания 75 Вт.".into(),
    );
    t.insert("tip.standby.title".into(), "Режим ожидания".into());
    t.insert(
        "tip.standby.message".into(),
        "Отключайте электроприборы от сети, когда не используете. Режим ожидания может потреблять до 10% от общего энергопотребления. Используйте удлинители с выключателем.".into(),
    );
    t.insert("tip.refrigerator.title".into(), "Холодильник".into());
    t.insert(
        "tip.refrigerator.message".into(),
        "Не ставьте холодильник рядом с плитой или батареей. Регулярно размораживайте, если нет системы No Frost. Горячая еда в холодильнике увеличивает расход энергии на 20%.".into(),
    );
    t.insert("tip.washing.title".into(), "Стиральная машина".into());
    t.insert(
        "tip.washing.message".into(),
        "Стирайте при полной загрузке барабана. Используйте режим 30-40°C вместо 60°C: экономия до 50% электроэнергии. Запускайте стирку в ночное время по льготному тарифу.".into(),
    );
    t.insert("tip.kettle.title".into(), "Электрочайник".into());
    t.insert(
        "tip.kettle.message".into(),
        "Кипятите только необходимое количество воды. Регулярно очищайте чайник от накипи: она увеличивает расход энергии на 15-20%. Рассмотрите термопот для частого использования.".into(),
    );
    t.insert("tip.air_conditioning.title".into(), "Кондиционер".into());
    t.insert(
        "tip.air_conditioning.message".into(),
        "Устанавливайте температуру не ниже 24°C летом. Каждый градус ниже увеличивает расход на 5-8%. Регулярно чистите фильтры. Закрывайте окна и двери при работе кондиционера.".into(),
    );
    t.insert("tip.daylight.title".into(), "Естественное освещение".into());
    t.insert(
        "tip.daylight.message".into(),
        "Максимально используйте дневной свет. Держите окна чистыми, используйте светлые шторы и не загораживайте окна мебелью.".into(),
    );
    t.insert("tip.heaters.title".into(), "Электрообогреватели".into());
    t.insert(
        "tip.heaters.message".into(),
        "Обогреватели относятся к самым энергозатратным приборам. Утеплите окна и двери. Используйте обогреватель только в одной комнате и выключайте при выходе из дома.".into(),
    );
    t.insert("tip.computer.title".into(), "Компьютер и ноутбук".into());
    t.insert(
        "tip.computer.message".into(),
        "Используйте режим энергосбережения. Выключайте монитор при перерывах более 10 минут. Ноутбук потребляет в 3-4 раза меньше настольного ПК. Отключайте зарядку после полной зарядки.".into(),
    );
    t.insert("tip.iron.title".into(), "Утюг".into());
    t.insert(
        "tip.iron.message".into(),
        "Гладьте сразу большое количество белья. Начинайте с вещей, требующих низкой температуры. Выключайте утюг за 5-10 минут до окончания: остаточного тепла хватит для лёгких тканей.".into(),
    );
    t.insert("tip.dishwasher.title".into(), "Посудомоечная машина".into());
    t.insert(
        "tip.dishwasher.message".into(),
        "Запускайте только при полной загрузке. Используйте эко-режим. Откажитесь от режима сушки: откройте дверцу и дайте посуде высохнуть естественным путём.".into(),
    );
    t.insert("tip.television.title".into(), "Телевизор".into());
    t.insert(
        "tip.television.message".into(),
        "Уменьшите яркость экрана, заводские настройки часто завышены. Используйте таймер автовыключения. Полностью выключайте телевизор, а не оставляйте в режиме ожидания.".into(),
    );
    t.insert("tip.efficiency_class.title".into(), "Класс энергоэффективности".into());
    t.insert(
        "tip.efficiency_class.message".into(),
        "При покупке новой техники выбирайте класс A++ или A+++. Разница в потреблении между классами A и D может достигать 50%. Это окупится за 2-3 года эксплуатации.".into(),
    );

    // Appliance tips
    t.insert("appliance_tip.prefix.advice".into(), "Совет: ".into());
    t.insert("appliance_tip.prefix.warning".into(), "Внимание: ".into());
    t.insert(
        "appliance_tip.refrigerator".into(),
        "Не ставьте холодильник рядом с плитой или батареей. Регулярно размораживайте. Горячая еда увеличивает расход на 20%.".into(),
    );
    t.insert(
        "appliance_tip.kettle".into(),
        "Кипятите только нужное количество воды. Очищайте чайник от накипи: она увеличивает расход на 15-20%.".into(),
    );
    t.insert(
        "appliance_tip.washing_machine".into(),
        "Стирайте при полной загрузке. Режим 30-40°C вместо 60°C экономит до 50% энергии. Запускайте стирку ночью по льготному тарифу.".into(),
    );
    t.insert(
        "appliance_tip.air_conditioner".into(),
        "Температура не ниже 24°C. Каждый градус ниже добавляет 5-8% к расходу. Чистите фильтры. Закрывайте окна при работе.".into(),
    );
    t.insert(
        "appliance_tip.heater".into(),
        "Обогреватели очень энергозатратны! Утеплите окна и двери. Используйте только в одной комнате. Выключайте при выходе.".into(),
    );
    t.insert(
        "appliance_tip.television".into(),
        "Уменьшите яркость экрана. Используйте таймер автовыключения. Выключайте полностью, а не в режим ожидания.".into(),
    );
    t.insert(
        "appliance_tip.computer".into(),
        "Используйте режим энергосбережения. Выключайте монитор при перерывах более 10 минут.".into(),
    );
    t.insert(
        "appliance_tip.laptop".into(),
        "Отключайте зарядку после полной зарядки. Используйте режим энергосбережения.".into(),
    );
    t.insert(
        "appliance_tip.iron".into(),
        "Гладьте сразу много белья. Выключайте за 5-10 минут до конца: остаточного тепла хватит для лёгких тканей.".into(),
    );
    t.insert(
        "appliance_tip.dishwasher".into(),
        "Запускайте при полной загрузке. Используйте эко-режим. Откажитесь от сушки, дайте посуде высохнуть естественно.".into(),
    );
    t.insert(
        "appliance_tip.microwave".into(),
        "Размораживайте продукты заранее в холодильнике, а не в микроволновке. Накрывайте еду крышкой для быстрого нагрева.".into(),
    );
    t.insert(
        "appliance_tip.water_heater".into(),
        "Бойлер относится к главным потребителям! Установите температуру 55-60°C. Выключайте при длительном отсутствии.".into(),
    );
    t.insert(
        "appliance_tip.hair_dryer".into(),
        "Подсушите волосы полотенцем перед феном. Используйте среднюю температуру: она бережнее и экономичнее.".into(),
    );
    t.insert(
        "appliance_tip.lighting".into(),
        "Если это не LED, замените! LED экономит до 80% энергии. Выключайте свет, выходя из комнаты.".into(),
    );
    t.insert(
        "appliance_tip.stove".into(),
        "Используйте посуду по размеру конфорки. Накрывайте крышкой. Выключайте за 5-10 минут до готовности.".into(),
    );
    t.insert(
        "appliance_tip.very_high".into(),
        "Этот прибор потребляет более {kwh} кВт·ч в день! Это значительная нагрузка. Рассмотрите способы сокращения времени использования.".into(),
    );
    t.insert(
        "appliance_tip.high".into(),
        "Прибор потребляет более {kwh} кВт·ч в день. Старайтесь использовать его в ночное время по льготному тарифу.".into(),
    );

    t
}

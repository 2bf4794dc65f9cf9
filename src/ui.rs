use crate::metrics::{COST_PER_KM, EMISSION_GRAMS_PER_KM, MAX_DISTANCE_KM};
use crate::models::{UserProfile, Weekday};

pub fn render_index(profile: Option<&UserProfile>, today: Weekday) -> String {
    let day_options: String = Weekday::ALL
        .iter()
        .map(|day| {
            let selected = if *day == today { " selected" } else { "" };
            format!(r#"<option value="{day}"{selected}>{day}</option>"#)
        })
        .collect();

    let (name, age, vehicle, city) = match profile {
        Some(p) => (p.name.as_str(), p.age, p.vehicle.as_str(), p.city.as_str()),
        None => ("", 25, "", ""),
    };

    // User text goes in last, with braces escaped, so it is never expanded.
    INDEX_HTML
        .replace("{{AGE}}", &age.to_string())
        .replace("{{HAS_PROFILE}}", if profile.is_some() { "true" } else { "false" })
        .replace("{{DAY_OPTIONS}}", &day_options)
        .replace("{{COST_PER_KM}}", &COST_PER_KM.to_string())
        .replace("{{EMISSION_PER_KM}}", &EMISSION_GRAMS_PER_KM.to_string())
        .replace("{{MAX_KM}}", &MAX_DISTANCE_KM.to_string())
        .replace("{{NAME}}", &escape_html(name))
        .replace("{{VEHICLE}}", &escape_html(vehicle))
        .replace("{{CITY}}", &escape_html(city))
}

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            _ => out.push(ch),
        }
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Weekly Travel Tracker</title>
  <style>
    :root {
      --paper: #f3f6f1;
      --ink: #1f2a24;
      --muted: #66736b;
      --leaf: #2e8b57;
      --rust: #c8553d;
      --sky: #3a6ea5;
      --card: #ffffff;
    }

    * { box-sizing: border-box; }

    body {
      margin: 0;
      background: var(--paper);
      color: var(--ink);
      font-family: "IBM Plex Sans", "Segoe UI", sans-serif;
      display: grid;
      grid-template-columns: 280px 1fr;
      min-height: 100vh;
    }

    aside {
      background: #e2ebe4;
      padding: 28px 22px;
      display: grid;
      align-content: start;
      gap: 12px;
    }

    main { padding: 32px; display: grid; gap: 24px; align-content: start; }

    label { display: grid; gap: 4px; font-size: 0.9rem; color: var(--muted); }

    input, select {
      font: inherit;
      padding: 8px 10px;
      border: 1px solid #c3cfc6;
      border-radius: 8px;
      background: #fff;
    }

    button {
      font: inherit;
      border: none;
      border-radius: 8px;
      padding: 10px 14px;
      background: var(--leaf);
      color: #fff;
      cursor: pointer;
    }

    button.secondary { background: #8a948d; }

    section.card {
      background: var(--card);
      border-radius: 14px;
      padding: 22px;
      box-shadow: 0 8px 24px rgba(31, 42, 36, 0.08);
    }

    .row { display: flex; gap: 14px; flex-wrap: wrap; align-items: end; }
    .metrics { display: grid; grid-template-columns: repeat(auto-fit, minmax(150px, 1fr)); gap: 12px; }
    .metric { background: var(--paper); border-radius: 10px; padding: 12px; }
    .metric span { display: block; font-size: 0.8rem; color: var(--muted); }
    .metric strong { font-size: 1.3rem; }
    table { width: 100%; border-collapse: collapse; }
    th, td { text-align: left; padding: 6px 8px; border-bottom: 1px solid #e3e8e4; }
    .notice { color: var(--muted); }
    .error { color: var(--rust); min-height: 1.2em; }
    .hidden { display: none; }
    svg { width: 100%; height: 220px; }
  </style>
</head>
<body>
  <aside>
    <h2>User Information</h2>
    <label>Name <input id="name" value="{{NAME}}" /></label>
    <label>Age <input id="age" type="number" min="1" max="120" value="{{AGE}}" /></label>
    <label>Bike model <input id="vehicle" value="{{VEHICLE}}" /></label>
    <label>City <input id="city" value="{{CITY}}" /></label>
    <button id="save-profile">Save User Info</button>
    <p id="profile-status" class="error"></p>
  </aside>

  <main>
    <header>
      <h1>Weekly Travel Tracker</h1>
      <p id="greeting" class="notice">Fill in your information in the sidebar to get started.</p>
    </header>

    <div id="tracker" class="hidden">
      <section class="card">
        <h2>Daily Entry</h2>
        <div class="row">
          <label>Day <select id="day">{{DAY_OPTIONS}}</select></label>
          <label>Did you travel?
            <select id="traveled"><option value="yes">Yes</option><option value="no">No</option></select>
          </label>
          <label class="travel-only">Destination <input id="destination" /></label>
          <label class="travel-only">Distance (km) <input id="distance" type="number" min="0" max="{{MAX_KM}}" value="0" /></label>
          <button id="save-day">Save</button>
          <form method="post" action="/days/clear"><button class="secondary" type="submit">Clear All Data</button></form>
        </div>
        <p id="existing" class="notice"></p>
        <div class="metrics travel-only">
          <div class="metric"><span>Estimated cost</span><strong id="preview-cost">0</strong></div>
          <div class="metric"><span>Carbon emission</span><strong id="preview-emission">0 g</strong></div>
        </div>
        <p id="day-status" class="error"></p>
      </section>

      <section class="card">
        <h2>Weekly Summary</h2>
        <table>
          <thead><tr><th>Day</th><th>Destination</th><th>Distance</th><th>Cost</th><th>Emission</th></tr></thead>
          <tbody id="records"></tbody>
        </table>
        <div class="metrics" id="totals"></div>
        <div class="metrics" id="emissions"></div>
      </section>

      <section class="card">
        <h2>Analytics</h2>
        <svg id="distance-chart"></svg>
        <svg id="share-chart"></svg>
        <svg id="trend-chart"></svg>
        <div class="metrics" id="impact"></div>
      </section>
    </div>
  </main>

  <script>
    const COST_PER_KM = {{COST_PER_KM}};
    const EMISSION_PER_KM = {{EMISSION_PER_KM}};
    let hasProfile = {{HAS_PROFILE}};

    const $ = (id) => document.getElementById(id);
    const esc = (text) => String(text).replace(/[&<>"']/g, (c) => `&#${c.charCodeAt(0)};`);
    const metric = (label, value) =>
      `<div class="metric"><span>${label}</span><strong>${value}</strong></div>`;

    function showTracker() {
      $('tracker').classList.toggle('hidden', !hasProfile);
      if (hasProfile) {
        $('greeting').textContent = `Welcome, ${$('name').value}!`;
      }
    }

    function updatePreview() {
      const km = Number($('distance').value) || 0;
      $('preview-cost').textContent = `₹${km * COST_PER_KM}`;
      $('preview-emission').textContent = `${km * EMISSION_PER_KM} g`;
      const travel = $('traveled').value === 'yes';
      document.querySelectorAll('.travel-only').forEach((el) => el.classList.toggle('hidden', !travel));
    }

    async function loadDay() {
      const res = await fetch(`/api/days/${$('day').value}`);
      const record = await res.json();
      if (record) {
        $('existing').textContent = `Data for ${record.day} already exists. You can update it below.`;
        $('traveled').value = record.traveled ? 'yes' : 'no';
        $('destination').value = record.traveled ? record.destination : '';
        $('distance').value = record.distance_km;
      } else {
        $('existing').textContent = '';
        $('destination').value = '';
        $('distance').value = 0;
      }
      updatePreview();
    }

    function barChart(svg, points) {
      const max = Math.max(...points.map((p) => p.distance_km), 1);
      const width = 100 / Math.max(points.length, 1);
      svg.setAttribute('viewBox', '0 0 100 60');
      svg.setAttribute('preserveAspectRatio', 'none');
      svg.innerHTML = points.map((p, i) => {
        const h = (p.distance_km / max) * 50;
        return `<rect x="${i * width + 1}" y="${55 - h}" width="${width - 2}" height="${h}" fill="var(--sky)"><title>${p.day}: ${p.distance_km} km</title></rect>`;
      }).join('');
    }

    function shareChart(svg, points) {
      const colors = ['#2e8b57', '#3a6ea5', '#c8553d', '#d9a441', '#7b5ea7', '#4aa3a2', '#8a948d'];
      svg.setAttribute('viewBox', '-1.2 -1.2 2.4 2.4');
      svg.removeAttribute('preserveAspectRatio');
      let start = -Math.PI / 2;
      svg.innerHTML = points.filter((p) => p.emission_share_pct > 0).map((p, i) => {
        const label = `<title>${p.day}: ${p.emission_share_pct.toFixed(1)}% of emissions</title>`;
        const color = colors[i % colors.length];
        if (p.emission_share_pct >= 99.999) {
          return `<circle r="1" fill="${color}">${label}</circle>`;
        }
        const sweep = (p.emission_share_pct / 100) * 2 * Math.PI;
        const end = start + sweep;
        const large = sweep > Math.PI ? 1 : 0;
        const path = `M 0 0 L ${Math.cos(start)} ${Math.sin(start)} A 1 1 0 ${large} 1 ${Math.cos(end)} ${Math.sin(end)} Z`;
        start = end;
        return `<path d="${path}" fill="${color}">${label}</path>`;
      }).join('') + '<circle r="0.5" fill="var(--card)" />';
    }

    function trendChart(svg, points) {
      const line = (key, color) => {
        const max = Math.max(...points.map((p) => p[key]), 1);
        const step = points.length > 1 ? 100 / (points.length - 1) : 0;
        const coords = points.map((p, i) => `${i * step},${55 - (p[key] / max) * 50}`).join(' ');
        return `<polyline points="${coords}" fill="none" stroke="${color}" stroke-width="1" />`;
      };
      svg.setAttribute('viewBox', '0 0 100 60');
      svg.setAttribute('preserveAspectRatio', 'none');
      svg.innerHTML = line('cost_units', 'var(--leaf)') + line('emission_grams', 'var(--rust)');
    }

    async function refresh() {
      if (!hasProfile) return;
      const summary = await (await fetch('/api/summary')).json();
      $('records').innerHTML = summary.records.map((r) =>
        `<tr><td>${r.day}</td><td>${esc(r.destination)}</td><td>${r.distance_km} km</td><td>₹${r.cost_units}</td><td>${r.emission_grams} g</td></tr>`
      ).join('');

      const s = summary.summary;
      $('totals').innerHTML = s.travel_days === 0 ? '' :
        metric('Total distance', `${s.total_distance_km} km`) +
        metric('Total cost', `₹${s.total_cost}`) +
        metric('Total emissions', `${s.total_emission_grams} g`) +
        metric('Travel days', `${s.travel_days}/${s.days_in_week} days`);

      const e = summary.emissions;
      $('emissions').innerHTML = e
        ? metric('Max daily emission', `${e.max} g`) +
          metric('Min daily emission', `${e.min} g`) +
          metric('Average daily emission', `${e.average.toFixed(1)} g`)
        : '';

      const analytics = await (await fetch('/api/analytics')).json();
      barChart($('distance-chart'), analytics.points);
      shareChart($('share-chart'), analytics.points);
      trendChart($('trend-chart'), analytics.points);

      const i = summary.impact;
      $('impact').innerHTML = analytics.points.length === 0 ? '' :
        metric('Weekly CO2 equivalent', `${i.co2_kg.toFixed(2)} kg`) +
        metric('Trees needed to offset', i.trees_to_offset.toFixed(2)) +
        metric('Fuel saved', `${i.fuel_saved_liters} L`);
    }

    $('save-profile').addEventListener('click', async () => {
      const res = await fetch('/api/profile', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({
          name: $('name').value,
          age: Number($('age').value),
          vehicle: $('vehicle').value,
          city: $('city').value,
        }),
      });
      if (!res.ok) {
        $('profile-status').textContent = await res.text();
        return;
      }
      $('profile-status').textContent = '';
      hasProfile = true;
      showTracker();
      await loadDay();
      await refresh();
    });

    $('save-day').addEventListener('click', async () => {
      const traveled = $('traveled').value === 'yes';
      const res = await fetch(`/api/days/${$('day').value}`, {
        method: 'PUT',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({
          traveled,
          destination: $('destination').value,
          distance_km: traveled ? Number($('distance').value) : 0,
        }),
      });
      $('day-status').textContent = res.ok ? '' : await res.text();
      await loadDay();
      await refresh();
    });

    $('day').addEventListener('change', loadDay);
    $('traveled').addEventListener('change', updatePreview);
    $('distance').addEventListener('input', updatePreview);

    showTracker();
    if (hasProfile) {
      loadDay().then(refresh);
    }
  </script>
</body>
</html>
"#;

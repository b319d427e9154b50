use crate::history::HISTORY_CAPACITY;

pub fn render_index() -> String {
    INDEX_HTML.replace("{{CAPACITY}}", &HISTORY_CAPACITY.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Lifestyle Analyzer</title>
  <script src="https://cdn.jsdelivr.net/npm/chart.js@4"></script>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&display=swap');

    :root {
      --bg: #0f172a;
      --card: rgba(30, 41, 59, 0.88);
      --ink: #e2e8f0;
      --muted: #94a3b8;
      --accent: #8b5cf6;
      --accent-2: #06b6d4;
      --shadow: 0 24px 60px rgba(2, 6, 23, 0.45);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, #312e81, transparent 60%), var(--bg);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(1080px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 24px;
    }

    .card {
      background: var(--card);
      border-radius: 22px;
      box-shadow: var(--shadow);
      padding: 24px;
    }

    h1 {
      margin: 0 0 6px;
      font-size: clamp(1.8rem, 4vw, 2.6rem);
    }

    .subtitle {
      margin: 0;
      color: var(--muted);
    }

    form {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 14px;
      align-items: end;
    }

    label {
      display: grid;
      gap: 6px;
      font-size: 0.9rem;
      color: var(--muted);
    }

    input, select {
      padding: 10px 12px;
      border-radius: 12px;
      border: 1px solid #334155;
      background: #0b1220;
      color: var(--ink);
      font: inherit;
    }

    button {
      padding: 10px 16px;
      border-radius: 999px;
      border: none;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
    }

    button.secondary {
      background: transparent;
      border: 1px solid #475569;
      color: var(--ink);
    }

    button.active {
      background: var(--accent-2);
      border-color: var(--accent-2);
    }

    .kpis {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(140px, 1fr));
      gap: 14px;
    }

    .kpi span {
      display: block;
      color: var(--muted);
      font-size: 0.85rem;
    }

    .kpi strong {
      font-size: 1.6rem;
    }

    .charts {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
      gap: 24px;
    }

    .trend-head {
      display: flex;
      justify-content: space-between;
      align-items: center;
      gap: 12px;
      flex-wrap: wrap;
    }

    .status {
      min-height: 1.2em;
      color: var(--muted);
    }

    footer {
      text-align: center;
      color: var(--muted);
      opacity: 0;
      transition: opacity 400ms ease;
    }

    footer.visible {
      opacity: 1;
    }
  </style>
</head>
<body>
  <main class="app">
    <header class="card">
      <h1>Lifestyle Analyzer</h1>
      <p class="subtitle">Log today's sleep, study, screen time and stress. The last {{CAPACITY}} entries are kept.</p>
    </header>

    <section class="card">
      <form id="analyze-form">
        <label>Sleep (h)<input id="sleep" type="number" step="0.1" min="0" placeholder="7" /></label>
        <label>Study (h)<input id="study" type="number" step="0.1" min="0" placeholder="4" /></label>
        <label>Screen (h)<input id="screen" type="number" step="0.1" min="0" placeholder="3" /></label>
        <label>Stress
          <select id="stress">
            <option>Low</option>
            <option>Medium</option>
            <option>High</option>
          </select>
        </label>
        <button type="submit">Analyze</button>
        <button type="button" class="secondary" id="sample-btn">Load sample</button>
      </form>
      <p class="status" id="status"></p>
    </section>

    <section class="card kpis">
      <div class="kpi"><span>Score</span><strong id="kpi-score">—</strong></div>
      <div class="kpi"><span>Category</span><strong id="kpi-cat">—</strong></div>
      <div class="kpi"><span>Sleep</span><strong id="kpi-sleep">—</strong></div>
      <div class="kpi"><span>Study</span><strong id="kpi-study">—</strong></div>
      <div class="kpi"><span>Stress</span><strong id="kpi-stress">—</strong></div>
    </section>

    <section class="card">
      <span class="subtitle">Advice</span>
      <p id="advice">—</p>
    </section>

    <section class="charts">
      <div class="card"><canvas id="overview"></canvas></div>
      <div class="card"><canvas id="budget"></canvas></div>
    </section>

    <section class="card">
      <div class="trend-head">
        <h2>Trend</h2>
        <div>
          <button type="button" class="secondary active" data-view="week">Week</button>
          <button type="button" class="secondary" data-view="month">Month</button>
          <button type="button" class="secondary" id="reset-btn">Reset demo</button>
        </div>
      </div>
      <canvas id="trend"></canvas>
    </section>

    <footer id="site-footer">Lifestyle Analyzer</footer>
  </main>

  <script>
    const instances = {};
    const statusEl = document.getElementById('status');
    const viewButtons = document.querySelectorAll('[data-view]');

    const setStatus = (text) => {
      statusEl.textContent = text;
    };

    const draw = (snapshot) => {
      const canvas = document.getElementById(snapshot.target);
      if (!canvas) {
        return;
      }
      if (instances[snapshot.target]) {
        instances[snapshot.target].destroy();
      }
      const { spec } = snapshot;
      const line = spec.kind === 'line';
      const datasets = spec.datasets.map((set) => ({
        label: set.label,
        data: set.values,
        backgroundColor: line ? set.colors[1] : set.colors,
        borderColor: line ? set.colors[0] : undefined,
        borderRadius: spec.kind === 'bar' ? 8 : undefined,
        tension: line ? 0.3 : undefined,
        pointRadius: line ? 4 : undefined,
        fill: line
      }));
      const scales = spec.kind === 'doughnut' ? {} : {
        y: { min: spec.y_min ?? undefined, max: spec.y_max ?? undefined, beginAtZero: true }
      };
      instances[snapshot.target] = new Chart(canvas.getContext('2d'), {
        type: spec.kind,
        data: { labels: spec.labels, datasets },
        options: {
          plugins: { legend: { display: spec.kind === 'doughnut', position: 'bottom' } },
          scales
        }
      });
    };

    const showAnalysis = (analysis) => {
      document.getElementById('kpi-score').textContent = analysis.score;
      document.getElementById('kpi-cat').textContent = analysis.category_label;
      document.getElementById('kpi-sleep').textContent = `${analysis.sleep} h`;
      document.getElementById('kpi-study').textContent = `${analysis.study} h`;
      document.getElementById('kpi-stress').textContent = analysis.stress;
      document.getElementById('advice').textContent = analysis.advice;
    };

    const request = async (method, url, body) => {
      const res = await fetch(url, {
        method,
        headers: body ? { 'content-type': 'application/json' } : undefined,
        body: body ? JSON.stringify(body) : undefined
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    };

    const activeView = () => {
      const active = document.querySelector('[data-view].active');
      return active ? active.dataset.view : 'week';
    };

    const refreshTrend = async () => {
      draw(await request('GET', `/api/trend?view=${activeView()}`));
    };

    const handleAnalysis = async (response) => {
      showAnalysis(response.analysis);
      response.charts.forEach(draw);
      await refreshTrend();
    };

    document.getElementById('analyze-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const body = {
        sleep: document.getElementById('sleep').value,
        study: document.getElementById('study').value,
        screen: document.getElementById('screen').value,
        stress: document.getElementById('stress').value
      };
      request('POST', '/api/analyze', body)
        .then(handleAnalysis)
        .catch((err) => setStatus(err.message));
    });

    document.getElementById('sample-btn').addEventListener('click', () => {
      request('POST', '/api/sample')
        .then((response) => {
          const { analysis } = response;
          document.getElementById('sleep').value = analysis.sleep;
          document.getElementById('study').value = analysis.study;
          document.getElementById('screen').value = analysis.screen;
          document.getElementById('stress').value = analysis.stress;
          return handleAnalysis(response);
        })
        .catch((err) => setStatus(err.message));
    });

    viewButtons.forEach((button) => {
      button.addEventListener('click', () => {
        viewButtons.forEach((other) => other.classList.toggle('active', other === button));
        refreshTrend().catch((err) => setStatus(err.message));
      });
    });

    document.getElementById('reset-btn').addEventListener('click', () => {
      request('POST', '/api/reset')
        .then((response) => {
          viewButtons.forEach((button) => button.classList.toggle('active', button.dataset.view === 'week'));
          if (response.trend) {
            draw(response.trend);
          }
          alert(response.message);
        })
        .catch((err) => setStatus(err.message));
    });

    const footer = document.getElementById('site-footer');
    new IntersectionObserver((entries) => {
      entries.forEach((entry) => footer.classList.toggle('visible', entry.isIntersecting));
    }, { threshold: 0.02 }).observe(footer);

    request('GET', '/api/charts')
      .then((snapshots) => snapshots.forEach(draw))
      .catch((err) => setStatus(err.message));
  </script>
</body>
</html>
"#;
